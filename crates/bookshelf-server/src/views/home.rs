use maud::{html, Markup};

use super::{View, ViewContext};

/// Landing page: add a book, browse the list
#[derive(Debug, Clone, Copy, Default)]
pub struct Home;

impl View for Home {
    fn id(&self) -> &'static str {
        "home"
    }

    fn title(&self) -> &str {
        "Bookshelf"
    }

    fn render(&self, _ctx: &ViewContext<'_>) -> Markup {
        html! {
            h1 { "Bookshelf" }
            form action="/book/create/" method="get" {
                label for="name" { "Book name" }
                input #name type="text" name="name" maxlength="64" required;
                button type="submit" { "Add" }
            }
            p {
                a href="/book/list/" { "All books" }
            }
        }
    }
}
