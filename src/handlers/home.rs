use axum::response::Html;
use axum_extra::extract::cookie::CookieJar;

use crate::{flash, templates::home_page};

pub async fn index(jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, flashes) = flash::take(jar);
    (jar, Html(home_page(&flashes).into_string()))
}
