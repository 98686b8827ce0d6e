use shared_types::Identity;
use yew::prelude::*;

use crate::components::nav_links::NavLinks;
use crate::config::HeaderConfig;
use crate::services::auth::resolve_identity;
use crate::session::{log_out, WebSession};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub config: HeaderConfig,
}

/// Resolves the visitor's identity once per mount and renders [`NavLinks`].
///
/// Renders nothing until the identity is known.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let identity = use_state(|| None::<Identity>);

    {
        let identity = identity.clone();
        use_effect_with(props.config.clone(), move |config| {
            let config = config.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let resolved = resolve_identity(&config).await;
                tracing::debug!(
                    authenticated = resolved.is_authenticated(),
                    "Resolved header identity"
                );
                identity.set(Some(resolved));
            });
            || ()
        });
    }

    let on_logout = {
        let config = props.config.clone();
        Callback::from(move |()| {
            let session = WebSession::new(config.clone());
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = log_out(&session).await {
                    tracing::error!("Logout did not complete: {}", e);
                }
            });
        })
    };

    match &*identity {
        Some(identity) => html! {
            <NavLinks
                identity={identity.clone()}
                login_href={props.config.login_href.clone()}
                register_href={props.config.register_href.clone()}
                {on_logout}
            />
        },
        None => html! {},
    }
}
