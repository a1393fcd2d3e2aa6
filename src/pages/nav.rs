use web_sys::MouseEvent;
use yew::prelude::*;

use crate::dom;

pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#alerts", "Alerts"),
    ("#resources", "Resources"),
    ("#events", "Events"),
    ("#involvement", "Get Involved"),
    ("#contact", "Contact"),
];

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let links = NAV_ITEMS.iter().map(|(href, label)| {
        let href = *href;
        let onclick = {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                dom::scroll_to_anchor(href);
            })
        };
        html! {
            <li class="nav__item">
                <a href={href} class="nav__link" onclick={onclick}>{*label}</a>
            </li>
        }
    });

    // The header's inline style belongs to the activation controller, never set it here.
    html! {
        <header class="header" id="header">
            <nav class="nav container">
                <a href="#home" class="nav__logo">{"Cyberyantra"}</a>
                <div class={classes!("nav__menu", (*menu_open).then(|| "active"))} id="nav-menu">
                    <ul class="nav__list">
                        { for links }
                    </ul>
                </div>
                <button
                    class={classes!("nav__toggle", (*menu_open).then(|| "active"))}
                    id="nav-toggle"
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
        </header>
    }
}
