use leptos::either::Either;
use leptos::prelude::*;

use super::{ClosingBrace, CodeHeading};
use crate::portfolio::{ContactMethod, CONTACT_METHODS};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 px-4">
            <div class="max-w-4xl mx-auto">
                <CodeHeading keyword="void" title="contactMe()" open_brace=true />
                <div class="grid md:grid-cols-2 gap-6 mb-8">
                    {CONTACT_METHODS.iter().map(|c| view! { <ContactCard contact=*c /> }).collect_view()}
                </div>
                <div class="text-center space-y-4">
                    <p class="text-muted-foreground">
                        <span class="text-primary">"printf("</span>
                        "\"Let's build something amazing together!\""
                        <span class="text-primary">");"</span>
                    </p>
                    <p class="text-sm text-muted-foreground">
                        "I'm always interested in discussing new opportunities, collaborations, or just chatting about technology."
                    </p>
                </div>
                <ClosingBrace />
            </div>
        </section>
    }
}

#[component]
fn ContactCard(contact: ContactMethod) -> impl IntoView {
    let external = contact.is_external();
    let value = match contact.link {
        Some(href) => Either::Left(view! {
            <a
                href=href
                class="text-muted-foreground hover:text-primary transition-colors block"
                target=external.then_some("_blank")
                rel=external.then_some("noopener noreferrer")
            >
                {contact.value}
            </a>
        }),
        None => Either::Right(view! { <p class="text-muted-foreground">{contact.value}</p> }),
    };

    view! {
        <div class="bg-card border border-border rounded-lg p-6 hover:border-primary/50 transition-colors space-y-3">
            <div class="flex items-start space-x-3">
                <i class=format!("{} text-primary mt-1", contact.icon.class()) />
                <div class="flex-1">
                    <h3 class="text-lg">{contact.label}</h3>
                    {value}
                </div>
            </div>
            <p class="text-muted-foreground text-sm leading-relaxed ml-8">{contact.description}</p>
        </div>
    }
}
