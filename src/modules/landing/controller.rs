use super::page::LandingPage;
use crate::prelude::*;
use axum::response::Html;

#[controller(path = "")]
pub struct LandingController {
    page: Arc<LandingPage>,
}

#[routes(LandingController)]
impl LandingController {
    #[get("/")]
    pub async fn index(&self) -> Html<String> {
        Html(self.page.html().to_string())
    }
}
