//! Contact app: social links plus a message form validated in the browser.
//!
//! Nothing is sent anywhere; a valid message is turned into a `mailto:` link.

use leptos::*;
use thiserror::Error;

const CONTACT_EMAIL: &str = "sachinmehta247@gmail.com";
const MAX_MESSAGE_CHARS: usize = 2000;

struct SocialLink {
    label: &'static str,
    href: &'static str,
}

const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/sachin-mehta-785704272/",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/AEGON247",
    },
    SocialLink {
        label: "Email",
        href: "mailto:sachinmehta247@gmail.com",
    },
    SocialLink {
        label: "Instagram",
        href: "https://www.instagram.com/sachin.mehta_247",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
enum ContactFieldError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("That email address does not look right.")]
    InvalidEmail,
    #[error("Please write a message.")]
    MissingMessage,
    #[error("Messages are limited to {} characters.", MAX_MESSAGE_CHARS)]
    MessageTooLong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

impl ContactMessage {
    fn mailto_href(&self) -> String {
        format!(
            "mailto:{CONTACT_EMAIL}?subject={}&body={}",
            percent_encode(&format!("Portfolio message from {}", self.name)),
            percent_encode(&format!("{}\n\nReply to: {}", self.message, self.email)),
        )
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

fn validate_contact_form(
    name: &str,
    email: &str,
    message: &str,
) -> Result<ContactMessage, Vec<ContactFieldError>> {
    let (name, email, message) = (name.trim(), email.trim(), message.trim());
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push(ContactFieldError::MissingName);
    }
    if email.is_empty() {
        errors.push(ContactFieldError::MissingEmail);
    } else if !is_plausible_email(email) {
        errors.push(ContactFieldError::InvalidEmail);
    }
    if message.is_empty() {
        errors.push(ContactFieldError::MissingMessage);
    } else if message.chars().count() > MAX_MESSAGE_CHARS {
        errors.push(ContactFieldError::MessageTooLong);
    }

    if errors.is_empty() {
        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    } else {
        Err(errors)
    }
}

#[cfg(target_arch = "wasm32")]
fn percent_encode(raw: &str) -> String {
    js_sys::encode_uri_component(raw).into()
}

// Leaves the same characters unescaped as `encodeURIComponent`.
#[cfg(not(target_arch = "wasm32"))]
fn percent_encode(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(char::from(byte)),
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

#[component]
pub fn ContactApp() -> impl IntoView {
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let message = create_rw_signal(String::new());
    let errors = create_rw_signal(Vec::<ContactFieldError>::new());
    let ready = create_rw_signal(None::<ContactMessage>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match validate_contact_form(&name.get(), &email.get(), &message.get()) {
            Ok(valid) => {
                errors.set(Vec::new());
                ready.set(Some(valid));
            }
            Err(found) => {
                ready.set(None);
                errors.set(found);
            }
        }
    };

    view! {
        <div class="app-contact">
            <h2>"Get In Touch"</h2>
            <div class="app-content">
                <ul class="contact-links">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a href=link.href target="_blank" rel="noopener noreferrer">
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <form class="contact-form" on:submit=on_submit novalidate=true>
                    <input
                        type="text"
                        placeholder="Your Name"
                        prop:value=name
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        type="email"
                        placeholder="Your Email"
                        prop:value=email
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Your Message"
                        rows="4"
                        prop:value=message
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                    <ul class="contact-form-errors" role="alert">
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|err| view! { <li>{err.to_string()}</li> })
                                .collect_view()
                        }}
                    </ul>
                    <button type="submit">"Send Message"</button>
                </form>

                {move || {
                    ready.get().map(|valid| {
                        view! {
                            <p class="contact-form-ready">
                                "Your message is ready. "
                                <a href=valid.mailto_href()>"Open it in your mail client"</a>
                            </p>
                        }
                    })
                }}
            </div>
        </div>
    }
}
