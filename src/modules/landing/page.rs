use crate::di::{Container, Injectable, Result};

const TEMPLATE: &str = include_str!("../../../assets/landing.html");

/// Where the "go to API" button points
pub const API_HREF: &str = "/users/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

pub const ENDPOINTS: [Endpoint; 5] = [
    Endpoint {
        method: "GET",
        path: "/users/",
        description: "Получить список всех пользователей",
    },
    Endpoint {
        method: "POST",
        path: "/users/",
        description: "Создать нового пользователя",
    },
    Endpoint {
        method: "GET",
        path: "/users/{id}",
        description: "Получить пользователя по ID",
    },
    Endpoint {
        method: "PATCH",
        path: "/users/{id}",
        description: "Обновить данные пользователя",
    },
    Endpoint {
        method: "DELETE",
        path: "/users/{id}",
        description: "Удалить пользователя",
    },
];

/// The landing document, rendered once
pub struct LandingPage {
    html: String,
}

impl LandingPage {
    pub fn render(endpoints: &[Endpoint]) -> Self {
        let cards: Vec<String> = endpoints.iter().map(render_card).collect();
        let html = TEMPLATE
            .replace("{{endpoints}}", &cards.join("\n"))
            .replace("{{api_href}}", API_HREF);
        Self { html }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

fn render_card(endpoint: &Endpoint) -> String {
    format!(
        r#"                <div class="endpoint-card">
                    <span class="method {class}">{method}</span>
                    <span class="path">{path}</span>
                    <p class="description">{description}</p>
                </div>"#,
        class = endpoint.method.to_ascii_lowercase(),
        method = endpoint.method,
        path = endpoint.path,
        description = endpoint.description,
    )
}

impl Injectable for LandingPage {
    fn inject(_container: &Container) -> Result<Self> {
        Ok(Self::render(&ENDPOINTS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_endpoint_is_listed() {
        let page = LandingPage::render(&ENDPOINTS);
        let html = page.html();

        assert!(html.starts_with("<!DOCTYPE html>"));
        for endpoint in ENDPOINTS {
            assert!(html.contains(endpoint.description));
            assert!(html.contains(&format!(
                r#"<span class="method {}">{}</span>"#,
                endpoint.method.to_ascii_lowercase(),
                endpoint.method
            )));
        }
        assert_eq!(html.matches(r#"class="endpoint-card""#).count(), 5);
    }

    #[test]
    fn test_placeholders_are_filled() {
        let html = LandingPage::render(&ENDPOINTS).html().to_string();
        assert!(!html.contains("{{"));
        assert!(html.contains(r#"href="/users/""#));
    }
}
