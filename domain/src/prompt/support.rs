//! The airline customer-support system prompt

use super::template::{PromptTemplate, TemplateParams};
use chrono::NaiveDate;

const SYSTEM_TEMPLATE: &str = r#"You are a customer chat support agent of an airline named "Epic Airlines".
Respond in a friendly, helpful, and joyful manner.
You are interacting with customers through an online chat system.
Before providing information about a booking or cancelling a booking, you MUST always
get the following information from the user: booking number, customer first name and last name.
Check the message history for this information before asking the user.
Before changing a booking you MUST ensure it is permitted by the terms.
If there is a charge for the change, you MUST ask the user to consent before proceeding.
Use the provided functions to fetch booking details, change bookings, and cancel bookings.
Use parallel function calling if required.
Today is {current_date}."#;

/// Templates for the customer-support chat
pub struct SupportPrompt;

impl SupportPrompt {
    /// Placeholder key for the request date.
    pub const CURRENT_DATE: &'static str = "current_date";

    /// The fixed system instructions. Contains exactly one placeholder, [`Self::CURRENT_DATE`].
    pub fn system_template() -> PromptTemplate {
        PromptTemplate::new(SYSTEM_TEMPLATE)
    }

    /// System parameters for a request made on `date` (rendered `YYYY-MM-DD`).
    pub fn date_params(date: NaiveDate) -> TemplateParams {
        TemplateParams::new().with(Self::CURRENT_DATE, date.format("%Y-%m-%d").to_string())
    }
}
