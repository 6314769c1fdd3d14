//! Outreach mail-compose links for discovered addresses.

pub const OUTREACH_SUBJECT: &str = "Advertising Proposal";

const OUTREACH_BODY: &str = "Dear Sir/Madam,

it was with great joy that I've found your contact on your website ({source_url}).

I'd like to reach out to you on a meeting as I'd like to explain my interest in driving an advertising campaign in your website and pay you for that based on the traffic your website has.

Looking forward to hearing from you.

Best regards,
Your Best AI Media Buyer";

/// Body text of the outreach message for an address found on `source_url`.
pub fn outreach_body(source_url: &str) -> String {
    OUTREACH_BODY.replace("{source_url}", source_url)
}

/// `mailto:` link with the fixed subject and body, percent-encoded.
pub fn outreach_mailto(recipient: &str, source_url: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(OUTREACH_SUBJECT),
        urlencoding::encode(&outreach_body(source_url)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_encodes_subject_and_body() {
        let link = outreach_mailto("info@acme.io", "https://acme.io/contact?x=1");

        assert!(link.starts_with("mailto:info@acme.io?subject=Advertising%20Proposal&body="));
        assert!(link.contains("Dear%20Sir%2FMadam%2C%0A%0A"));
        assert!(link.contains("https%3A%2F%2Facme.io%2Fcontact%3Fx%3D1"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn test_body_mentions_source() {
        let body = outreach_body("https://acme.io");
        assert!(body.contains("your website (https://acme.io)."));
        assert!(body.ends_with("Your Best AI Media Buyer"));
    }
}
