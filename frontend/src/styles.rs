use stylist::yew::{styled_component, Global};
use yew::prelude::*;

/// Page-wide rules: navbar, hero, success section, pricing cards, contact form.
#[styled_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(
            r#"
            body {
                margin: 0;
                background: #0d0d12;
                color: #f5f5f7;
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
            }

            .top-nav {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 100;
                background: transparent;
                transition: background 0.3s ease, box-shadow 0.3s ease;
            }

            .top-nav.scrolled {
                background: rgba(13, 13, 18, 0.95);
                box-shadow: 0 2px 12px rgba(0, 0, 0, 0.4);
            }

            .nav-content {
                display: flex;
                align-items: center;
                justify-content: space-between;
                max-width: 1200px;
                margin: 0 auto;
                padding: 1rem 2rem;
            }

            .nav-logo {
                font-size: 1.5rem;
                font-weight: 700;
                color: #fff;
                text-decoration: none;
            }

            .nav-right {
                display: flex;
                gap: 1.5rem;
            }

            .nav-link {
                color: #ddd;
                text-decoration: none;
            }

            .burger-menu {
                display: none;
                background: none;
                border: none;
            }

            .burger-menu span {
                display: block;
                width: 24px;
                height: 2px;
                margin: 5px 0;
                background: #fff;
            }

            .hero {
                min-height: 80vh;
                display: flex;
                align-items: center;
                justify-content: center;
                text-align: center;
                padding: 6rem 2rem 2rem;
            }

            .hero-cta {
                padding: 0.9rem 2rem;
                border: none;
                border-radius: 8px;
                background: #1e90ff;
                color: #fff;
                font-size: 1rem;
                cursor: pointer;
            }

            .success-map-section {
                padding: 4rem 2rem;
                text-align: center;
            }

            .success-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                gap: 2rem;
                max-width: 1000px;
                margin: 0 auto;
            }

            .success-value {
                font-size: 2.5rem;
                font-weight: 700;
                color: #1e90ff;
            }

            .pricing-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                gap: 1.5rem;
                max-width: 1000px;
                margin: 0 auto;
            }

            .pricing-card {
                padding: 2rem;
                border-radius: 16px;
                border: 1px solid rgba(255, 255, 255, 0.1);
                transition: border-color 0.2s ease, transform 0.2s ease;
            }

            .pricing-card-active {
                border-color: #1e90ff;
                transform: translateY(-4px);
            }

            .contact-form {
                display: flex;
                flex-direction: column;
                gap: 1rem;
                max-width: 560px;
                margin: 0 auto;
            }

            .form-group {
                display: flex;
                flex-direction: column;
                gap: 0.4rem;
            }

            @media (max-width: 768px) {
                .burger-menu {
                    display: block;
                }

                .nav-right {
                    display: none;
                }

                .nav-right.mobile-menu-open {
                    display: flex;
                    flex-direction: column;
                    position: absolute;
                    top: 100%;
                    left: 0;
                    right: 0;
                    padding: 1rem 2rem;
                    background: rgba(13, 13, 18, 0.98);
                }
            }
            "#
        )} />
    }
}
