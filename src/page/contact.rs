//! Contact section: outreach channels and ordering steps.

use super::{Section, icons, overlay};
use crate::content::{ContactChannel, OWNER, ORDER_STEPS};
use maud::{Markup, html};

pub fn render() -> Markup {
    let phone = ContactChannel::phone();
    let instagram = ContactChannel::instagram();
    let whatsapp = ContactChannel::whatsapp();

    html! {
        section.contact id=(Section::Contact.id()) {
            div.pattern-sprinkles {}
            (overlay::render())
            div.container.container-narrow {
                div.section-header {
                    h2.display.on-dark { "Let's Get in Touch!" }
                    p.section-intro.on-dark { "Ready to order? We'd love to hear from you!" }
                }
                div.contact-panel {
                    div.contact-channels {
                        h3.display.panel-title { "Contact " (OWNER) }

                        a.channel.channel-phone href=(phone.target_uri)
                            target=[new_tab(&phone)] rel=[no_opener(&phone)] {
                            div.channel-icon { "📞" }
                            div {
                                p.channel-caption { "Call or WhatsApp" }
                                p.channel-label { (phone.display_label) }
                            }
                        }

                        a.channel.channel-instagram href=(instagram.target_uri)
                            target=[new_tab(&instagram)] rel=[no_opener(&instagram)] {
                            div.channel-icon { (icons::instagram("icon-md")) }
                            div {
                                p.channel-caption { "Follow us on Instagram" }
                                p.channel-label { (instagram.display_label) }
                            }
                        }

                        a.whatsapp href=(whatsapp.target_uri)
                            target=[new_tab(&whatsapp)] rel=[no_opener(&whatsapp)] {
                            (icons::whatsapp("icon-md"))
                            span { (whatsapp.display_label) }
                        }
                    }

                    div.order-guide {
                        h3.display.panel-title { "How to Order" }
                        ol.steps {
                            @for (i, step) in ORDER_STEPS.iter().enumerate() {
                                li.step {
                                    span.step-number { (i + 1) }
                                    span.step-text { (step) }
                                }
                            }
                        }
                        div.note {
                            p {
                                strong.accent { "Note:" }
                                " Orders are made fresh, so please give us at least"
                                strong.accent-teal { " 2-3 days advance notice" }
                                " for your order."
                            }
                        }
                    }
                }
            }
        }
    }
}

/// External channels open in a new tab.
fn new_tab(channel: &ContactChannel) -> Option<&'static str> {
    channel.is_external().then_some("_blank")
}

fn no_opener(channel: &ContactChannel) -> Option<&'static str> {
    channel.is_external().then_some("noopener noreferrer")
}
