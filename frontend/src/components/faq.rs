use web_sys::MouseEvent;
use yew::prelude::*;

const FAQ_ITEMS: &[(&str, &str)] = &[
    (
        "How long does an AI MVP take to build?",
        "Most MVPs ship in two to four weeks. We scope a single core workflow, \
         build it end to end, and put it in front of real users before \
         expanding anything else.",
    ),
    (
        "What happens after you deliver the project?",
        "Every build includes a handover period with documentation and a \
         walkthrough. If you'd rather we keep iterating, we offer ongoing \
         development and support retainers.",
    ),
    (
        "Do you work with existing codebases?",
        "Yes. Workflow automation and AI feature work often starts inside a \
         product you already run. We audit what's there first and integrate \
         rather than rewrite.",
    ),
    (
        "How is pricing structured?",
        "Fixed price per scoped project. You'll know the full cost before we \
         start, and scope changes are agreed in writing before they affect \
         the price.",
    ),
    (
        "What if I'm not sure which service I need?",
        "Book a call or send a message through the form below, describe the \
         problem in your own words, and we'll recommend the smallest thing \
         that solves it.",
    ),
];

/// Accordion where opening one question closes the others.
#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="faq-section">
            <h2>{"Frequently Asked Questions"}</h2>
            {
                for FAQ_ITEMS.iter().enumerate().map(|(index, (question, answer))| {
                    let is_open = *open == Some(index);
                    let toggle = {
                        let open = open.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            open.set(if is_open { None } else { Some(index) });
                        })
                    };

                    html! {
                        <div class={classes!("faq-item", is_open.then_some("active"))}>
                            <button class="faq-question" onclick={toggle}>
                                <span class="question-text">{*question}</span>
                                <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                            </button>
                            {
                                if is_open {
                                    html! { <div class="faq-answer"><p>{*answer}</p></div> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }
                })
            }
        </section>
    }
}
