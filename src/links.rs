//! The studio's outbound links, in display order.

use serde::{Deserialize, Serialize};

pub const WHATSAPP_NUMBER: &str = "917016531812";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkIcon {
    Phone,
    Instagram,
    Star,
    MapPin,
    Youtube,
    MessageSquare,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    pub icon: LinkIcon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SocialLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>, icon: LinkIcon) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            icon,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

pub fn whatsapp_url(number: &str) -> String {
    format!("https://wa.me/{}", number)
}

pub fn studio_links() -> Vec<SocialLink> {
    vec![
        SocialLink::new("Book Appointment", whatsapp_url(WHATSAPP_NUMBER), LinkIcon::Phone)
            .with_description("Direct booking via WhatsApp"),
        SocialLink::new(
            "Portfolio",
            "https://www.instagram.com/naillogic_?igsh=Z3QzYjdpMjZkZjF2&utm_source=qr",
            LinkIcon::Instagram,
        )
        .with_description("Latest works on Instagram"),
        SocialLink::new(
            "Client Reviews",
            "https://share.google/atYnn1ueXubRQMgyN",
            LinkIcon::Star,
        )
        .with_description("Read 5-star experiences"),
        SocialLink::new(
            "Salon Location",
            "https://maps.app.goo.gl/cuYYxd4jJe3t3JSw6?g_st=ipc",
            LinkIcon::MapPin,
        )
        .with_description("Navigate to studio"),
        SocialLink::new(
            "Tutorials",
            "https://youtube.com/@naillogic7171?si=Y5URwuhWRpIMt8MC",
            LinkIcon::Youtube,
        )
        .with_description("Watch on YouTube"),
        SocialLink::new(
            "Write a Review",
            "https://search.google.com/local/writereview?placeid=ChIJ3-d4949ZYzkRls9rK18u2TI",
            LinkIcon::MessageSquare,
        )
        .with_description("Share your experience"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_link_comes_first() {
        let links = studio_links();
        assert_eq!(links.len(), 6);
        assert_eq!(links[0].label, "Book Appointment");
        assert_eq!(links[0].url, "https://wa.me/917016531812");
        assert!(links.iter().all(|link| link.url.starts_with("https://")));
    }

    #[test]
    fn test_link_serialization() {
        let link = SocialLink::new("Tutorials", "https://youtube.com", LinkIcon::Youtube);
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            serde_json::json!({ "label": "Tutorials", "url": "https://youtube.com", "icon": "youtube" })
        );
        assert_eq!(
            serde_json::to_value(LinkIcon::MessageSquare).unwrap(),
            "message-square"
        );
    }
}
