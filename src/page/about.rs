//! About section.

use super::{Section, logo};
use crate::content::{FEATURES, SHOP_NAME_PROSE};
use maud::{Markup, html};

pub fn render() -> Markup {
    html! {
        section.about id=(Section::About.id()) {
            div.blob.blob-pink {}
            div.blob.blob-teal {}
            div.container.about-grid {
                div.about-visual {
                    div.about-frame {
                        div.about-frame-inner {
                            (logo(300, SHOP_NAME_PROSE, "logo-center"))
                        }
                    }
                    div.badge.badge-teal.bounce-soft { "Homemade!" }
                    div.badge.badge-pink.bounce-soft style="animation-delay: 0.5s" { "Fresh Daily!" }
                }
                div.about-text {
                    h2.display.gradient-text { "Baked with Love" }
                    div.about-story {
                        p {
                            "Welcome to " strong.accent { (SHOP_NAME_PROSE) } "! "
                            "We're a home bakery passionate about creating delicious, freshly baked treats "
                            "that bring joy to every occasion."
                        }
                        p {
                            "From soft, chewy cookies to perfectly moist muffins and adorable cake pops, "
                            "every item is crafted with care using quality ingredients and lots of love."
                        }
                        p {
                            "Whether you're celebrating a special moment or just craving something sweet, "
                            "we've got the perfect treat for you!"
                        }
                    }
                    ul.features {
                        @for feature in &FEATURES {
                            li.feature {
                                span.feature-icon { (feature.icon) }
                                span.feature-text { (feature.text) }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_in_order() {
        let html = render().into_string();
        let mut last = 0;
        for feature in &FEATURES {
            let at = html.find(feature.text).unwrap();
            assert!(at > last, "{} out of order", feature.text);
            last = at;
        }
        assert_eq!(html.matches("class=\"feature\"").count(), FEATURES.len());
    }
}
