use crate::client::session::{SessionError, SessionStore};

/// Seven days, the lifetime of a login session.
pub const DEFAULT_MAX_AGE: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "strict",
            SameSite::Lax => "lax",
            SameSite::None => "none",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    /// Lifetime in seconds, `None` for a browser-session cookie.
    pub max_age: Option<u64>,
    pub path: String,
    pub domain: Option<String>,
    pub secure: bool,
    pub same_site: SameSite,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            max_age: Some(DEFAULT_MAX_AGE),
            path: "/".to_string(),
            domain: None,
            secure: false,
            same_site: SameSite::Lax,
        }
    }
}

impl CookieOptions {
    pub fn with_max_age(max_age: u64) -> Self {
        Self {
            max_age: Some(max_age),
            ..Self::default()
        }
    }
}

/// Renders the string assigned to `document.cookie` for one cookie.
pub fn format_cookie(name: &str, value: &str, options: &CookieOptions) -> String {
    let mut cookie = format!(
        "{}={}",
        urlencoding::encode(name),
        urlencoding::encode(value)
    );

    if let Some(max_age) = options.max_age {
        cookie.push_str(&format!("; max-age={}", max_age));
    }
    if !options.path.is_empty() {
        cookie.push_str(&format!("; path={}", options.path));
    }
    if let Some(domain) = &options.domain {
        cookie.push_str(&format!("; domain={}", domain));
    }
    if options.secure {
        cookie.push_str("; secure");
    }
    cookie.push_str(&format!("; samesite={}", options.same_site.as_str()));

    cookie
}

/// Renders a cookie string that makes the browser drop the cookie.
pub fn format_expired_cookie(name: &str, options: &CookieOptions) -> String {
    format_cookie(
        name,
        "",
        &CookieOptions {
            max_age: Some(0),
            ..options.clone()
        },
    )
}

/// Finds the value of `name` in a `document.cookie` style header.
pub fn parse_cookie(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        let key = urlencoding::decode(key).ok()?;

        if key == name {
            urlencoding::decode(value).ok().map(|value| value.into_owned())
        } else {
            None
        }
    })
}

/// Session store backed by the browser's `document.cookie`.
#[derive(Debug, Clone, Default)]
pub struct CookieStore {
    options: CookieOptions,
}

impl CookieStore {
    /// `options` supply path and domain used when removing cookies.
    pub fn new(options: CookieOptions) -> Self {
        Self { options }
    }
}

#[cfg(feature = "web")]
fn html_document() -> Result<web_sys::HtmlDocument, SessionError> {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.dyn_into::<web_sys::HtmlDocument>().ok())
        .ok_or_else(|| SessionError::Unavailable("no HTML document".to_string()))
}

#[cfg(feature = "web")]
fn read_cookies() -> Result<String, SessionError> {
    html_document()?
        .cookie()
        .map_err(|e| SessionError::Unavailable(format!("{:?}", e)))
}

#[cfg(feature = "web")]
fn write_cookie(cookie: &str) -> Result<(), SessionError> {
    html_document()?
        .set_cookie(cookie)
        .map_err(|e| SessionError::Unavailable(format!("{:?}", e)))
}

#[cfg(not(feature = "web"))]
fn read_cookies() -> Result<String, SessionError> {
    Err(SessionError::Unavailable(
        "cookies require the web feature".to_string(),
    ))
}

#[cfg(not(feature = "web"))]
fn write_cookie(_cookie: &str) -> Result<(), SessionError> {
    Err(SessionError::Unavailable(
        "cookies require the web feature".to_string(),
    ))
}

impl SessionStore for CookieStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(parse_cookie(&read_cookies()?, key))
    }

    fn set(&self, key: &str, value: &str, options: &CookieOptions) -> Result<(), SessionError> {
        write_cookie(&format_cookie(key, value, options))
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        write_cookie(&format_expired_cookie(key, &self.options))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Tests the cookie string for default options.
    ///
    /// Expected: encoded pair followed by max-age, path and samesite
    #[test]
    fn formats_default_cookie() {
        let cookie = format_cookie("u_info", "{\"id\":1}", &CookieOptions::default());

        assert_eq!(
            cookie,
            "u_info=%7B%22id%22%3A1%7D; max-age=604800; path=/; samesite=lax"
        );
    }

    /// Tests the optional attributes.
    ///
    /// Expected: domain and secure flags present, no max-age for session cookies
    #[test]
    fn formats_optional_attributes() {
        let options = CookieOptions {
            max_age: None,
            path: "/admin".to_string(),
            domain: Some("example.com".to_string()),
            secure: true,
            same_site: SameSite::Strict,
        };

        assert_eq!(
            format_cookie("u_token", "abc", &options),
            "u_token=abc; path=/admin; domain=example.com; secure; samesite=strict"
        );
    }

    /// Tests the removal string.
    ///
    /// Expected: empty value with max-age=0
    #[test]
    fn formats_expired_cookie() {
        let cookie = format_expired_cookie("u_token", &CookieOptions::default());

        assert!(cookie.starts_with("u_token=; max-age=0;"));
    }

    /// Tests finding one cookie among several.
    ///
    /// Expected: decoded value for present names, None otherwise
    #[test]
    fn parses_cookie_header() {
        let header = "theme=dark; u_info=%7B%22id%22%3A1%7D;u_token=abc";

        assert_eq!(
            parse_cookie(header, "u_info").as_deref(),
            Some("{\"id\":1}")
        );
        assert_eq!(parse_cookie(header, "u_token").as_deref(), Some("abc"));
        assert_eq!(parse_cookie(header, "u_inf"), None);
        assert_eq!(parse_cookie("", "u_info"), None);
    }

    /// Tests that a value containing '=' survives a round through the header.
    ///
    /// Expected: the original value
    #[test]
    fn keeps_values_containing_equals() {
        let cookie = format_cookie("u_token", "a=b==", &CookieOptions::default());
        let pair = cookie.split(';').next().unwrap();

        assert_eq!(parse_cookie(pair, "u_token").as_deref(), Some("a=b=="));
    }
}
