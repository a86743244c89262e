//! One-shot user notifications carried across a redirect in a cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar};

pub const FLASH_COOKIE: &str = "_flash";

fn flash_cookie(value: String) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, value))
        .path("/")
        .http_only(true)
        .build()
}

fn read(jar: &CookieJar) -> Vec<String> {
    jar.get(FLASH_COOKIE)
        .and_then(|cookie| urlencoding::decode(cookie.value()).ok())
        .and_then(|json| serde_json::from_str::<Vec<String>>(&json).ok())
        .unwrap_or_default()
}

/// Queues `message` for the next rendered page.
pub fn push(jar: CookieJar, message: impl Into<String>) -> CookieJar {
    let mut messages = read(&jar);
    messages.push(message.into());

    match serde_json::to_string(&messages) {
        Ok(json) => jar.add(flash_cookie(urlencoding::encode(&json).into_owned())),
        Err(e) => {
            tracing::warn!("Failed to encode flash messages: {}", e);
            jar
        }
    }
}

/// Drains pending messages; the returned jar clears the cookie.
pub fn take(jar: CookieJar) -> (CookieJar, Vec<String>) {
    let messages = read(&jar);
    if messages.is_empty() && jar.get(FLASH_COOKIE).is_none() {
        return (jar, messages);
    }
    (jar.remove(flash_cookie(String::new())), messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_then_take() {
        let jar = push(CookieJar::new(), "Venue The Fillmore was successfully listed!");
        let jar = push(jar, "second");

        let (jar, messages) = take(jar);
        assert_eq!(
            messages,
            vec![
                "Venue The Fillmore was successfully listed!".to_string(),
                "second".to_string()
            ]
        );
        assert!(jar.get(FLASH_COOKIE).is_none());
    }

    #[test]
    fn test_take_without_cookie() {
        let (_, messages) = take(CookieJar::new());
        assert!(messages.is_empty());
    }

    #[test]
    fn test_garbage_cookie_is_ignored_and_cleared() {
        let jar = CookieJar::new().add(flash_cookie("%%%not-json".to_string()));
        let (jar, messages) = take(jar);

        assert!(messages.is_empty());
        assert!(jar.get(FLASH_COOKIE).is_none());
    }
}
