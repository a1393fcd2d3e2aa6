use yew::prelude::*;

struct Stat {
    target: u32,
    label: &'static str,
}

const STATS: &[Stat] = &[
    Stat { target: 5000, label: "People reached" },
    Stat { target: 1200, label: "Threats reported" },
    Stat { target: 150, label: "Workshops held" },
    Stat { target: 50, label: "Partner schools" },
];

struct CardContent {
    title: &'static str,
    body: &'static str,
    meta: &'static str,
}

const ALERTS: &[CardContent] = &[
    CardContent {
        title: "UPI refund scam",
        body: "Callers posing as bank staff ask you to \"approve\" a refund request. Approving sends money out, never in.",
        meta: "High risk",
    },
    CardContent {
        title: "Fake parcel delivery SMS",
        body: "Messages about a held package link to look-alike courier sites that harvest card details.",
        meta: "Medium risk",
    },
    CardContent {
        title: "Job offer over messaging apps",
        body: "Easy part-time tasks that turn into deposit requests. Legitimate employers never ask you to pay.",
        meta: "High risk",
    },
];

const RESOURCES: &[CardContent] = &[
    CardContent {
        title: "Password hygiene guide",
        body: "Build long passphrases, use a password manager and turn on two-factor authentication everywhere.",
        meta: "Guide",
    },
    CardContent {
        title: "Spotting phishing",
        body: "Check the sender, hover before you click and treat urgency as a red flag.",
        meta: "Checklist",
    },
    CardContent {
        title: "Reporting cybercrime",
        body: "Where and how to report fraud, what evidence to keep and what to expect next.",
        meta: "How-to",
    },
];

const EVENTS: &[CardContent] = &[
    CardContent {
        title: "Safe Banking Workshop",
        body: "A hands-on session on securing mobile banking and UPI apps.",
        meta: "Community hall, Saturday 10:00",
    },
    CardContent {
        title: "Cyber Safety for Parents",
        body: "Practical controls and conversations for keeping children safe online.",
        meta: "Online, Wednesday 18:30",
    },
];

const INVOLVEMENT: &[CardContent] = &[
    CardContent {
        title: "Volunteer",
        body: "Run awareness sessions in your neighbourhood with our ready-made material.",
        meta: "Join us",
    },
    CardContent {
        title: "Partner",
        body: "Schools, colleges and NGOs can host workshops for their communities.",
        meta: "Collaborate",
    },
    CardContent {
        title: "Report",
        body: "Seen a new scam? Tell us so we can warn others.",
        meta: "Share",
    },
];

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub kind: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub meta: &'static str,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <article class={classes!(props.kind)}>
            <h3 class="card__title">{props.title}</h3>
            <p class="card__body">{props.body}</p>
            <span class="card__meta">{props.meta}</span>
        </article>
    }
}

fn cards(kind: &'static str, items: &'static [CardContent]) -> Html {
    html! {
        <div class="card-grid">
            { for items.iter().map(|item| html! {
                <Card kind={kind} title={item.title} body={item.body} meta={item.meta} />
            }) }
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <main class="landing-page">
            <section class="hero" id="home">
                <div class="container">
                    <h1 class="hero__title">{"Empowering Digital Safety & Security Awareness"}</h1>
                    <p class="hero__subtitle">
                        {"Free guidance, live scam alerts and community workshops to keep everyone safer online."}
                    </p>
                    <a href="#involvement" class="btn btn--primary">{"Get Involved"}</a>
                    <div class="hero__stats">
                        { for STATS.iter().map(|stat| html! {
                            <div class="stat">
                                <span class="stat__number" data-target={stat.target.to_string()}>{"0"}</span>
                                <span class="stat__label">{stat.label}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section" id="alerts">
                <div class="container">
                    <h2 class="section__title">{"Latest Alerts"}</h2>
                    { cards("alert-card", ALERTS) }
                </div>
            </section>

            <section class="section" id="resources">
                <div class="container">
                    <h2 class="section__title">{"Resources"}</h2>
                    { cards("resource-card", RESOURCES) }
                </div>
            </section>

            <section class="section" id="events">
                <div class="container">
                    <h2 class="section__title">{"Upcoming Events"}</h2>
                    { cards("event-card", EVENTS) }
                </div>
            </section>

            <section class="section" id="involvement">
                <div class="container">
                    <h2 class="section__title">{"Get Involved"}</h2>
                    { cards("involvement-card", INVOLVEMENT) }
                </div>
            </section>

            <section class="section" id="contact">
                <div class="container">
                    <h2 class="section__title">{"Contact"}</h2>
                    <p>{"General enquiries: hello@cyberyantra.com"}</p>
                    <p>{"Security reports: security@cyberyantra.com"}</p>
                </div>
            </section>
        </main>
    }
}
