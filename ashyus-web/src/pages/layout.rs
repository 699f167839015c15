use super::navigate_to;
use crate::service::use_content;
use crate::Route;
use ashyus_common::{BannerPosition, Page, SecretTap, THEME_REFRESH_MS};
use ashyus_ui::stores::{AdminTab, CatalogStateStoreExt, SiteUiStateStoreExt};
use ashyus_ui::wasm_utils::{now_ms, sleep_ms, WindowEventListener};
use ashyus_ui::{
    AdSidebar, AdminPanel, BannerForm, BookForm, Footer, Header, IntroOverlay, MobileAdBanner,
    Modal, OfflineBanner, ReleaseForm,
};
use dioxus::prelude::*;
use std::rc::Rc;
use tracing::info;

#[component]
pub fn AppLayout() -> Element {
    let service = use_content();
    let current = use_route::<Route>().page();
    let site = service.site;
    let catalog = service.catalog;

    // Browser connectivity; listeners detach when the layout unmounts.
    use_hook({
        let service = service.clone();
        move || {
            let on_online = service.clone();
            let on_offline = service.clone();
            Rc::new((
                WindowEventListener::new("online", move || on_online.set_online(true)),
                WindowEventListener::new("offline", move || on_offline.set_online(false)),
            ))
        }
    });

    // A tab left open across a date boundary picks up the new theme.
    use_future(move || async move {
        loop {
            sleep_ms(THEME_REFRESH_MS).await;
            let current = *site.holiday_theme().peek();
            if let Some(theme) = current.changed_on(chrono::Local::now().date_naive()) {
                info!("Holiday theme changed to {:?}", theme);
                site.holiday_theme().set(theme);
            }
        }
    });

    let mut secret_tap = use_signal(SecretTap::new);
    let admin_open: ReadSignal<bool> = use_memo(move || *site.admin_open().read()).into();

    let intro_visible = *site.intro_visible().read();
    let online = *site.online().read();
    let theme = *site.holiday_theme().read();
    let newsletter = site.newsletter().read().clone();
    let mobile_dismissed = *site.mobile_banner_dismissed().read();

    let all_banners = catalog.banners().read().clone();
    let snapshot = catalog.read();
    let left = snapshot.banners_for(BannerPosition::Left);
    let right = snapshot.banners_for(BannerPosition::Right);
    drop(snapshot);

    let s = service.clone();
    let on_title_click = move |_: ()| {
        if secret_tap.write().register(now_ms()) {
            s.open_admin();
        } else {
            navigate_to(Page::Home);
        }
    };

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-200 {theme.css_class()}",
            if intro_visible {
                IntroOverlay { on_enter: move |_| site.intro_visible().set(false) }
            }
            OfflineBanner { online }
            Header {
                current,
                theme,
                on_navigate: move |page| navigate_to(page),
                on_title_click,
            }
            AdSidebar { banners: left, position: BannerPosition::Left }
            AdSidebar { banners: right, position: BannerPosition::Right }
            main { class: "xl:px-44 pb-24", Outlet::<Route> {} }
            Footer {
                newsletter,
                on_subscribe: {
                    let service = service.clone();
                    move |email: String| {
                        let service = service.clone();
                        spawn(async move { service.subscribe(email).await });
                    }
                },
                on_navigate: move |page| navigate_to(page),
            }
            MobileAdBanner {
                banners: all_banners,
                dismissed: mobile_dismissed,
                on_dismiss: move |_| site.mobile_banner_dismissed().set(true),
            }
            AdminModal { is_open: admin_open }
        }
    }
}

/// Admin panel wired to the content service
#[component]
fn AdminModal(is_open: ReadSignal<bool>) -> Element {
    let service = use_content();
    let generator_available = service.generator_available();
    let (admin, catalog) = (service.admin, service.catalog);

    let close = service.clone();
    let login = service.clone();
    let logout = service.clone();
    let tab = service.clone();

    rsx! {
        Modal { is_open, on_close: move |_| close.close_admin(),
            AdminPanel {
                state: admin,
                catalog,
                generator_available,
                on_login: move |(user, pass): (String, String)| login.login(&user, &pass),
                on_logout: move |_| logout.logout(),
                on_close: {
                    let service = service.clone();
                    move |_| service.close_admin()
                },
                on_tab_change: move |t: AdminTab| tab.select_tab(t),
                on_add_book: {
                    let service = service.clone();
                    move |form: BookForm| {
                        let service = service.clone();
                        spawn(async move { service.add_book(form).await });
                    }
                },
                on_update_book: {
                    let service = service.clone();
                    move |(id, form): (String, BookForm)| {
                        let service = service.clone();
                        spawn(async move { service.update_book(id, form).await });
                    }
                },
                on_remove_book: {
                    let service = service.clone();
                    move |id: String| {
                        let service = service.clone();
                        spawn(async move { service.remove_book(id).await });
                    }
                },
                on_add_banner: {
                    let service = service.clone();
                    move |form: BannerForm| {
                        let service = service.clone();
                        spawn(async move { service.add_banner(form).await });
                    }
                },
                on_remove_banner: {
                    let service = service.clone();
                    move |id: String| {
                        let service = service.clone();
                        spawn(async move { service.remove_banner(id).await });
                    }
                },
                on_add_release: {
                    let service = service.clone();
                    move |form: ReleaseForm| {
                        let service = service.clone();
                        spawn(async move { service.add_release(form).await });
                    }
                },
                on_remove_release: {
                    let service = service.clone();
                    move |id: String| {
                        let service = service.clone();
                        spawn(async move { service.remove_release(id).await });
                    }
                },
                on_save_author_photo: {
                    let service = service.clone();
                    move |url: String| {
                        let service = service.clone();
                        spawn(async move { service.update_author_photo(url).await });
                    }
                },
            }
        }
    }
}
