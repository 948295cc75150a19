pub const PRICE_API_URL: &str = match option_env!("PRICE_API_URL") {
    Some(url) => url,
    None => "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin&vs_currencies=usd&include_24hr_change=true&include_last_updated_at=true",
};

pub const EMAILJS_SERVICE_ID: &str = match option_env!("EMAILJS_SERVICE_ID") {
    Some(id) => id,
    None => "service_bitcoinwala",
};

pub const EMAILJS_TEMPLATE_ID: &str = match option_env!("EMAILJS_TEMPLATE_ID") {
    Some(id) => id,
    None => "template_contact",
};

pub const EMAILJS_PUBLIC_KEY: &str = match option_env!("EMAILJS_PUBLIC_KEY") {
    Some(key) => key,
    None => "",
};

pub const WHITEPAPER_URL: &str = "/whitepaper.pdf";

const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[cfg(debug_assertions)]
pub fn get_contact_endpoint() -> &'static str {
    // point CONTACT_ENDPOINT at a local mock while developing with trunk serve
    match option_env!("CONTACT_ENDPOINT") {
        Some(url) => url,
        None => EMAILJS_SEND_URL,
    }
}

#[cfg(not(debug_assertions))]
pub fn get_contact_endpoint() -> &'static str {
    EMAILJS_SEND_URL
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}
