//! Compiled-in email templates for verification codes.

use once_cell::sync::Lazy;
use regex::Regex;

/// What the code the user is about to receive will be used for
///
/// Only the wording of the email changes; the code lifecycle is
/// identical for every purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailPurpose {
    /// First confirmation of a freshly registered address
    Registration,
    /// Sign-in for an already confirmed address
    Login,
    /// Confirming an account deletion request
    AccountDeletion,
}

impl EmailPurpose {
    fn intro(&self) -> &'static str {
        match self {
            EmailPurpose::Registration => {
                "Welcome to Dog&Care! Use the code below to confirm your email address."
            }
            EmailPurpose::Login => "Use the code below to sign in to your Dog&Care account.",
            EmailPurpose::AccountDeletion => {
                "Use the code below to confirm the deletion of your Dog&Care account."
            }
        }
    }
}

/// A rendered verification email
#[derive(Debug, Clone)]
pub struct RenderedEmail {
    pub subject: String,
    pub html_message: String,
    pub plain_message: String,
}

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static BLANK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n+").expect("valid blank regex"));

/// Remove HTML tags and collapse the leftover blank lines, producing the
/// plain text alternative of an HTML body
pub fn strip_tags(html: &str) -> String {
    let text = TAG_RE.replace_all(html, "");
    let text = BLANK_RE.replace_all(text.trim(), "\n\n");
    text.lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the verification email for a code
///
/// The subject embeds the code so it shows in notification previews
/// without opening the message.
pub fn render_verification_email(code: &str, purpose: EmailPurpose) -> RenderedEmail {
    let subject = format!("[{code}] Your Verification Code for Dog&Care");
    let html_message = format!(
        "<html>\n\
         <body>\n\
         <p>Hello,</p>\n\
         <p>{intro}</p>\n\
         <p><strong style=\"font-size: 24px; letter-spacing: 4px;\">{code}</strong></p>\n\
         <p>This code expires in 10 minutes. If you did not request it, you can ignore this email.</p>\n\
         <p>The Dog&amp;Care Team</p>\n\
         </body>\n\
         </html>",
        intro = purpose.intro(),
    );
    let plain_message = strip_tags(&html_message).replace("&amp;", "&");

    RenderedEmail {
        subject,
        html_message,
        plain_message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_embeds_code() {
        let email = render_verification_email("042137", EmailPurpose::Login);
        assert_eq!(email.subject, "[042137] Your Verification Code for Dog&Care");
    }

    #[test]
    fn test_bodies_contain_code() {
        let email = render_verification_email("000001", EmailPurpose::Registration);
        assert!(email.html_message.contains("000001"));
        assert!(email.plain_message.contains("000001"));
        assert!(email.plain_message.contains("Welcome to Dog&Care!"));
    }

    #[test]
    fn test_plain_message_has_no_tags() {
        let email = render_verification_email("123456", EmailPurpose::AccountDeletion);
        assert!(!email.plain_message.contains('<'));
        assert!(!email.plain_message.contains('>'));
    }

    #[test]
    fn test_strip_tags() {
        let stripped = strip_tags("<p>Hello</p>\n<p><b>world</b></p>");
        assert_eq!(stripped, "Hello\nworld");
    }

    #[test]
    fn test_purpose_wording_differs() {
        let login = render_verification_email("123456", EmailPurpose::Login);
        let deletion = render_verification_email("123456", EmailPurpose::AccountDeletion);
        assert_ne!(login.html_message, deletion.html_message);
        assert!(deletion.plain_message.contains("deletion"));
    }
}
