//! Static facts about the foundation shown in the header, footer, and
//! contact page.

pub const FOUNDATION_NAME: &str = "Longhorn Foundation";
pub const TAGLINE: &str = "Community \u{2022} Literacy \u{2022} Impact";
pub const LOGO_SRC: &str = "/assets/logo.png";

pub const EMAIL: &str = "longhornfoundation@longhornpublishers.com";

pub const FOOTER_PHONE_DISPLAY: &str = "+254 708 282260";
pub const FOOTER_PHONE_TEL: &str = "tel:+254708282260";

pub const CONTACT_PHONE_DISPLAY: &str = "+254 715 377 722";
pub const CONTACT_PHONE_TEL: &str = "tel:+254715377722";

pub const ADDRESS_LINES: [&str; 3] =
    ["P.O. BOX 18033-500", "Funzi Road, Off Enterprise Rd, Industrial Area", "Nairobi-Kenya"];
pub const MAP_URL: &str = "https://maps.app.goo.gl/mkaSWeJLQu7fjWzx8";

pub const WEBSITE_URL: &str = "https://www.longhornfoundationtrust.org";
pub const WEBSITE_DISPLAY: &str = "www.longhornfoundationtrust.org";

pub const COPYRIGHT_YEAR: u16 = 2026;

pub const FEATURE_VIDEO_URL: &str = "https://www.youtube.com/watch?v=zTeKb3V_-ZE";

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}
