
#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    "/"  // Served by trunk from the crate root when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    match option_env!("ASSET_BASE_URL") {
        Some(base) => base,
        None => "/",  // Production URL
    }
}

pub fn contact_webhook_url() -> &'static str {
    option_env!("CONTACT_WEBHOOK_URL").unwrap_or(
        "https://discord.com/api/webhooks/1323810570067251273/9qZ222LdbWKOfWd23oj-E0nX4IgXWjylW4z-X28pQ9gQlgX22KQ8QJ7tEBTFAgy862SI",
    )
}

pub fn newsletter_webhook_url() -> &'static str {
    option_env!("NEWSLETTER_WEBHOOK_URL").unwrap_or(
        "https://discord.com/api/webhooks/1324196746170994798/pdSvh2m_cYV92Kmskyg-Jtj2vWkpl-Ypwzjjm6G4FC6tXO59XaIEul0-UeNhfuN9i560",
    )
}

pub fn asset_url(path: &str) -> String {
    format!("{}{}", get_asset_base(), path.trim_start_matches('/'))
}

// A slider image that never fires load or error gives up after this long.
pub const PRELOAD_TIMEOUT_MS: u32 = 15_000;

// Wait for the home page to render before scrolling to a section.
pub const SCROLL_DELAY_MS: u32 = 100;

pub const PHONE: &str = "863-712-1858";
pub const EMAIL: &str = "contact@centralfloridawindowcleaner.com";
