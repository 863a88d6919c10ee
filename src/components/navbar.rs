use arcade_core::config::NavLink;
use arcade_core::nav::{is_activation_key, NavState};
use leptos::prelude::*;

#[component]
pub fn Navbar(site_name: String, links: Vec<NavLink>) -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let open = move || nav.with(|n| n.open);

    let on_toggle = move || {
        nav.update(|n| {
            n.toggle();
        })
    };

    view! {
        <header class="navbar">
            <a href="/" class="logo">{site_name}</a>
            <div
                id="hamburger"
                class="hamburger"
                class:active=open
                tabindex="0"
                role="button"
                aria-label="Toggle navigation"
                aria-expanded=move || open().to_string()
                on:click=move |_| on_toggle()
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if is_activation_key(&ev.key()) {
                        ev.prevent_default();
                        on_toggle();
                    }
                }
            >
                <span></span>
                <span></span>
                <span></span>
            </div>
            <nav class="nav-links" class:active=open>
                {links.into_iter().enumerate().map(|(index, link)| view! {
                    <a
                        href=link.href
                        class:active=move || nav.with(|n| n.is_active(index))
                        on:click=move |_| nav.update(|n| n.select(index))
                    >
                        {link.label}
                    </a>
                }).collect::<Vec<_>>()}
            </nav>
        </header>
    }
}
