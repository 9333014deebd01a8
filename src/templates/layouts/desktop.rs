use chrono::{Datelike, Utc};
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Halifax Housing Hub" }
            }
            body {
                header class="navbar" {
                    h3 class="brand" { "Halifax Housing Hub" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/#find-apartment" { "Find an Apartment" } }
                            li { a href="/predict-price" { "Price Prediction Tool" } }
                            li { a href="#perks" { "Perks" } }
                            li { a href="#contact-us" { "Contact Us" } }
                        }
                    }
                }
                (content)
                (footer())
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="footer" {
            p { "© " (Utc::now().year()) " Halifax Housing Hub. All rights reserved." }
        }
    }
}
