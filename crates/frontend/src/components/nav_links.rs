use shared_types::Identity;
use yew::prelude::*;

/// Id of the logout link.
pub const LOGOUT_LINK_ID: &str = "logoutLink";

#[derive(Properties, PartialEq)]
pub struct NavLinksProps {
    pub identity: Identity,
    pub login_href: AttrValue,
    pub register_href: AttrValue,
    pub on_logout: Callback<()>,
}

/// Contents of the mount point for a given identity.
///
/// Pure: the same props always render the same markup. The logout link
/// swallows its own navigation and hands off to `on_logout`.
#[function_component(NavLinks)]
pub fn nav_links(props: &NavLinksProps) -> Html {
    match &props.identity {
        Identity::Authenticated { username } => {
            let onclick = {
                let on_logout = props.on_logout.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    on_logout.emit(());
                })
            };

            html! {
                <>
                    { "Logged in as " }
                    <b>{ username.clone() }</b>
                    { " " }
                    <a href="#" id={LOGOUT_LINK_ID} {onclick}>{ "Logout" }</a>
                </>
            }
        }
        Identity::Anonymous => html! {
            <>
                { "Anonymous | " }
                <a href={props.login_href.clone()}>{ "Login" }</a>
                { " | " }
                <a href={props.register_href.clone()}>{ "Register" }</a>
            </>
        },
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(identity: Identity) -> String {
        ServerRenderer::<NavLinks>::with_props(move || NavLinksProps {
            identity,
            login_href: AttrValue::from("/login"),
            register_href: AttrValue::from("/register"),
            on_logout: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    fn alice() -> Identity {
        Identity::from_username(Some("alice"))
    }

    #[tokio::test]
    async fn test_authenticated_shows_username_and_logout() {
        let html = render(alice()).await;

        assert!(html.contains("Logged in as"));
        assert!(html.contains("<b>alice</b>"));
        assert!(html.contains(r#"id="logoutLink""#));
        assert!(html.contains("Logout"));
        assert!(!html.contains(r#"href="/login""#));
        assert!(!html.contains(r#"href="/register""#));
    }

    #[tokio::test]
    async fn test_anonymous_shows_login_and_register() {
        let html = render(Identity::Anonymous).await;

        assert!(html.contains("Anonymous"));
        assert!(html.contains(r#"href="/login""#));
        assert!(html.contains(r#"href="/register""#));
        assert!(!html.contains(LOGOUT_LINK_ID));
        assert!(!html.contains("Logout"));
    }

    #[tokio::test]
    async fn test_render_is_idempotent() {
        assert_eq!(render(alice()).await, render(alice()).await);
        assert_eq!(
            render(Identity::Anonymous).await,
            render(Identity::Anonymous).await
        );
    }

    #[tokio::test]
    async fn test_username_is_escaped() {
        let html = render(Identity::from_username(Some("<script>x</script>"))).await;

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
