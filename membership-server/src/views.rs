//! Server-rendered pages
//!
//! Templates are compiled into the binary and loaded once into a shared
//! minijinja environment. HTML auto-escaping applies to every `.html` template.

use minijinja::{context, Environment};
use once_cell::sync::Lazy;

use crate::models::Member;

static TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("register.html", include_str!("../templates/register.html")),
    ("login.html", include_str!("../templates/login.html")),
    ("welcome.html", include_str!("../templates/welcome.html")),
    ("edit_profile.html", include_str!("../templates/edit_profile.html")),
    ("error.html", include_str!("../templates/error.html")),
];

static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_filter("add_stars", add_stars);
    for &(name, source) in TEMPLATES {
        env.add_template(name, source)
            .expect("bundled template must parse");
    }
    env
});

/// Decorate a string with a star on each side.
pub fn add_stars(value: String) -> String {
    format!("★{}★!", value)
}

pub fn index() -> Result<String, minijinja::Error> {
    ENV.get_template("index.html")?.render(context! {})
}

pub fn register() -> Result<String, minijinja::Error> {
    ENV.get_template("register.html")?.render(context! {})
}

pub fn login() -> Result<String, minijinja::Error> {
    ENV.get_template("login.html")?.render(context! {})
}

pub fn welcome(member: &Member) -> Result<String, minijinja::Error> {
    ENV.get_template("welcome.html")?
        .render(context! { member => member })
}

pub fn edit_profile(member: &Member) -> Result<String, minijinja::Error> {
    ENV.get_template("edit_profile.html")?
        .render(context! { member => member })
}

pub fn error(message: &str) -> Result<String, minijinja::Error> {
    ENV.get_template("error.html")?
        .render(context! { error_message => message })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> Member {
        Member {
            id: 7,
            username: "bob".into(),
            email: "bob@x.com".into(),
            password: "pw1".into(),
            phone: "0911".into(),
            birthdate: "2000-01-01".into(),
        }
    }

    #[test]
    fn add_stars_wraps_value() {
        assert_eq!(add_stars("bob".into()), "★bob★!");
        assert_eq!(add_stars(String::new()), "★★!");
    }

    #[test]
    fn static_pages_render() {
        assert!(index().unwrap().contains("href=\"/register\""));
        assert!(register().unwrap().contains("name=\"username\""));
        assert!(login().unwrap().contains("action=\"/login\""));
    }

    #[test]
    fn welcome_shows_member_fields() {
        let html = welcome(&bob()).unwrap();
        assert!(html.contains("★bob★!"));
        assert!(html.contains("bob@x.com"));
        assert!(html.contains("0911"));
        assert!(html.contains("/edit_profile/7"));
        assert!(html.contains("/delete/7"));
    }

    #[test]
    fn edit_form_prefills_values_but_not_username_input() {
        let html = edit_profile(&bob()).unwrap();
        assert!(html.contains("value=\"bob@x.com\""));
        assert!(html.contains("value=\"pw1\""));
        assert!(html.contains("action=\"/edit_profile/7\""));
        assert!(!html.contains("name=\"username\""));
    }

    #[test]
    fn error_message_is_escaped() {
        let html = error("<script>").unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
