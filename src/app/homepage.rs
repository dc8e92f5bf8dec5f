use leptos::prelude::*;
use leptos_meta::Title;

use super::sections::{Contact, Education, Experience, Footer, Hero, Projects, Skills};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <Skills />
        <Experience />
        <Projects />
        <Education />
        <Contact />
        <Footer />
    }
}
