//! Newsletter email templates

use askama::Template;

/// Thank-you email sent to a new subscriber
#[derive(Debug, Template)]
#[template(path = "emails/newsletter/subscription_confirmation.html")]
pub struct SubscriptionConfirmationTemplate<'a> {
    pub name: &'a str,
    pub product_name: &'a str,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_subscription_confirmation_greets_subscriber() -> TestResult {
        let html = SubscriptionConfirmationTemplate {
            name: "Ann & Bob",
            product_name: "The Clothing Loop",
        }
        .render()?;

        assert!(html.contains("Hi Ann &amp; Bob,"));
        assert!(html.contains("Thank you for subscribing!"));
        assert!(html.contains("The Clothing Loop"));

        Ok(())
    }
}
