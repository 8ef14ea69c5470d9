//! Contact form email templates

use askama::Template;

/// Email sent to the team for every contact form submission
#[derive(Debug, Template)]
#[template(path = "emails/contact/contact_form.html")]
pub struct ContactFormTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

/// Confirmation sent back to the visitor
#[derive(Debug, Template)]
#[template(path = "emails/contact/contact_confirmation.html")]
pub struct ContactConfirmationTemplate<'a> {
    pub name: &'a str,
    pub message: &'a str,
    pub product_name: &'a str,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_contact_form_escapes_visitor_input() -> TestResult {
        let html = ContactFormTemplate {
            name: "<script>alert(1)</script>",
            email: "ann@example.com",
            message: "Hello & goodbye",
        }
        .render()?;

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Hello &amp; goodbye"));

        Ok(())
    }

    #[test]
    fn test_confirmation_signs_with_product_name() -> TestResult {
        let html = ContactConfirmationTemplate {
            name: "Ann",
            message: "Hello",
            product_name: "The Clothing Loop",
        }
        .render()?;

        assert!(html.contains("Hi Ann,"));
        assert!(html.contains("The Clothing Loop"));

        Ok(())
    }
}
