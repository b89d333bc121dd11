//! WhatsApp deep link renderer
//!
//! The link only opens a chat with the summary typed in. It says nothing
//! about whether the inquiry was stored.

use urlencoding::encode;

use crate::domain::entities::Inquiry;

pub const UNSET_DATE: &str = "Belum fix";
pub const UNSET_BUDGET: &str = "Belum ditentukan";
pub const NO_SERVICES: &str = "-";

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Render the chat text for an inquiry
pub fn render_inquiry_message(brand_name: &str, inquiry: &Inquiry) -> String {
    let mut buf = String::new();

    buf.push_str(&format!(
        "Halo {}, saya ingin konsultasi pernikahan.\n\n",
        brand_name
    ));

    buf.push_str(&format!("Nama: {}\n", inquiry.name));
    buf.push_str(&format!("Email: {}\n", inquiry.email));
    buf.push_str(&format!("No. HP: {}\n", inquiry.phone));
    buf.push_str(&format!(
        "Tanggal Acara: {}\n",
        or_placeholder(&inquiry.event_date, UNSET_DATE)
    ));
    buf.push_str(&format!(
        "Budget: {}\n",
        or_placeholder(&inquiry.budget_range, UNSET_BUDGET)
    ));

    let services = if inquiry.service_interested.is_empty() {
        NO_SERVICES.to_string()
    } else {
        inquiry.service_interested.join(", ")
    };
    buf.push_str(&format!("Layanan: {}\n", services));

    buf.push_str(&format!("Pesan: {}", inquiry.message.trim()));
    buf
}

/// `https://wa.me/{digits}?text={encoded}`; non-digits in the number are dropped
pub fn whatsapp_link(number: &str, text: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{}?text={}", digits, encode(text))
}
