use maud::{html, Markup};

use crate::contact::{ContactForm, Field, FieldErrors};

fn field_error(errors: &FieldErrors, field: Field) -> Markup {
    html! {
        @if let Some(error) = errors.get(field) {
            p.field-error { (error.to_string()) }
        }
    }
}

pub(super) fn contact_form(form: &ContactForm) -> Markup {
    let values = form.values();
    let errors = form.errors();
    let sending = form.is_sending();

    html! {
        div.contact-card data-reveal="up" {
            form #contact-form method="post" action="/contact#contact" novalidate {
                div.field {
                    label for="name" { "Name" }
                    input #name.invalid[errors.name.is_some()] type="text" name="name"
                        value=(values.name);
                    (field_error(errors, Field::Name))
                }
                div.field {
                    label for="email" { "Email" }
                    input #email.invalid[errors.email.is_some()] type="email" name="email"
                        value=(values.email);
                    (field_error(errors, Field::Email))
                }
                div.field {
                    label for="message" { "Message" }
                    textarea #message.invalid[errors.message.is_some()] name="message" rows="4" {
                        (values.message)
                    }
                    (field_error(errors, Field::Message))
                }
                button.submit type="submit" disabled[sending] {
                    span.icon { "✉" }
                    span.label { @if sending { "Sending..." } @else { "Send Message" } }
                }
            }
        }
    }
}
