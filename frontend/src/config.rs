
/// Backend connection, baked in at build time. A build without these
/// renders every section from its fallback content.
pub fn supabase_url() -> Option<&'static str> {
    option_env!("SUPABASE_URL").filter(|url| !url.is_empty())
}

pub fn supabase_anon_key() -> Option<&'static str> {
    option_env!("SUPABASE_ANON_KEY").filter(|key| !key.is_empty())
}

// Height of the contact bar plus the main nav.
pub const NAV_OFFSET_PX: i32 = 120;

pub const AUTOPLAY_INTERVAL_MS: u32 = 4000;
pub const TRANSITION_LOCK_MS: u32 = 300;

pub const SECTION_TRACKING_MARGIN: &str = "-20% 0px -70% 0px";
