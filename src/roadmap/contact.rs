//! Contact action: turn the last accepted roadmap into a pre-filled email draft

use crate::config::ContactSection;
use crate::roadmap::session::RoadmapSession;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::{debug, info};

/// Default recipient of the roadmap draft
pub const DEFAULT_CONTACT_ADDRESS: &str = "newoninja@gmail.com";

/// Default subject of the roadmap draft
pub const DEFAULT_CONTACT_SUBJECT: &str =
    "Proposal Inquiry: Custom Automation Roadmap (Generated on Site)";

/// URI component encoding: everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Something that can open a URL (browser location, OS handler, recorder)
pub trait Navigator {
    fn navigate(&mut self, url: &str);
}

/// Percent-encode a value for use inside a URI component
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Email body embedding the roadmap text verbatim
pub fn contact_body(roadmap_text: &str) -> String {
    format!(
        "Hello SynthFlow AI Engineer,\n\n\
         I would like to discuss the following automation roadmap, which I generated using the demo on your website:\n\n\
         ---\n\
         {roadmap_text}\n\n\
         ---\n\n\
         I'm ready to move forward and discuss implementation details for my business. \
         Please let me know your availability for a quick discovery call.\n\n\
         Thank you!"
    )
}

/// Build the `mailto:` deep link for a roadmap text
pub fn mailto_link(contact: &ContactSection, roadmap_text: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        contact.address.trim(),
        encode_component(&contact.subject),
        encode_component(&contact_body(roadmap_text))
    )
}

/// Navigate to a pre-filled draft for the session's roadmap.
///
/// Returns `false` without navigating when no roadmap has been accepted yet.
pub fn contact_about_roadmap(
    session: &RoadmapSession,
    contact: &ContactSection,
    navigator: &mut dyn Navigator,
) -> bool {
    let Some(text) = session.current_text() else {
        debug!("Contact requested before any roadmap was generated");
        return false;
    };

    let link = mailto_link(contact, text);
    info!(
        recipient = %contact.address,
        link_len = link.len(),
        "Opening roadmap contact draft"
    );
    navigator.navigate(&link);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Navigator for Recorder {
        fn navigate(&mut self, url: &str) {
            self.0.push(url.to_string());
        }
    }

    #[test]
    fn test_encode_component_matches_uri_component_rules() {
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("Step 1:\n"), "Step%201%3A%0A");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn test_contact_body_layout() {
        let body = contact_body("ROADMAP");
        assert!(body.starts_with("Hello SynthFlow AI Engineer,\n\n"));
        assert!(body.contains("website:\n\n---\nROADMAP\n\n---\n\n"));
        assert!(body.contains("my business. Please let me know"));
        assert!(body.ends_with("Thank you!"));
    }

    #[test]
    fn test_empty_session_does_not_navigate() {
        let session = RoadmapSession::new();
        let mut recorder = Recorder::default();
        assert!(!contact_about_roadmap(
            &session,
            &ContactSection::default(),
            &mut recorder
        ));
        assert!(recorder.0.is_empty());
    }

    #[test]
    fn test_link_body_decodes_to_roadmap_text() {
        let mut session = RoadmapSession::new();
        let text = "Roadmap for Bakery (Problem: orders & invoices):\n\nStep 1: A\nStep 2: B\nStep 3: C\n";
        session.record(text.to_string());

        let mut recorder = Recorder::default();
        assert!(contact_about_roadmap(
            &session,
            &ContactSection::default(),
            &mut recorder
        ));

        let link = &recorder.0[0];
        assert!(link.starts_with("mailto:newoninja@gmail.com?subject="));
        let (_, body) = link.split_once("&body=").unwrap();
        let decoded = percent_decode_str(body).decode_utf8().unwrap();
        assert!(decoded.contains(text));

        let (_, rest) = link.split_once("?subject=").unwrap();
        let (subject, _) = rest.split_once('&').unwrap();
        assert_eq!(
            percent_decode_str(subject).decode_utf8().unwrap(),
            DEFAULT_CONTACT_SUBJECT
        );
    }

    #[test]
    fn test_repeated_contact_uses_same_text() {
        let mut session = RoadmapSession::new();
        session.record("Roadmap".to_string());
        let mut recorder = Recorder::default();
        contact_about_roadmap(&session, &ContactSection::default(), &mut recorder);
        contact_about_roadmap(&session, &ContactSection::default(), &mut recorder);
        assert_eq!(recorder.0.len(), 2);
        assert_eq!(recorder.0[0], recorder.0[1]);
    }
}
