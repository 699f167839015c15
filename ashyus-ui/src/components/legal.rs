//! Privacy policy and terms of use

use dioxus::prelude::*;

use crate::components::helpers::PageContainer;

#[component]
fn LegalSection(heading: &'static str, body: &'static str) -> Element {
    rsx! {
        section { class: "space-y-2",
            h2 { class: "font-serif text-2xl text-amber-300", "{heading}" }
            p { class: "text-slate-300 leading-relaxed", "{body}" }
        }
    }
}

#[component]
pub fn PrivacyView() -> Element {
    rsx! {
        PageContainer { title: "Política de Privacidade",
            div { class: "space-y-8",
                LegalSection {
                    heading: "Informações coletadas",
                    body: "Coletamos apenas o endereço de e-mail que você informa voluntariamente ao se inscrever na newsletter.",
                }
                LegalSection {
                    heading: "Uso das informações",
                    body: "Seu e-mail é usado exclusivamente para enviar novidades sobre lançamentos e conteúdos do autor. Não vendemos nem compartilhamos seus dados.",
                }
                LegalSection {
                    heading: "Cookies e anúncios",
                    body: "Este site pode exibir banners de parceiros e utilizar cookies de terceiros para medir audiência. Você pode desativar cookies nas configurações do navegador.",
                }
                LegalSection {
                    heading: "Contato",
                    body: "Para remover seu e-mail da lista, responda a qualquer mensagem da newsletter solicitando o descadastro.",
                }
            }
        }
    }
}

#[component]
pub fn TermsView() -> Element {
    rsx! {
        PageContainer { title: "Termos de Uso",
            div { class: "space-y-8",
                LegalSection {
                    heading: "Conteúdo",
                    body: "Sinopses, capítulos e imagens publicados aqui pertencem ao autor e não podem ser reproduzidos sem autorização.",
                }
                LegalSection {
                    heading: "Links externos",
                    body: "Os links para lojas e parceiros levam a sites de terceiros, com seus próprios termos e políticas.",
                }
                LegalSection {
                    heading: "Alterações",
                    body: "Estes termos podem ser atualizados a qualquer momento. O uso continuado do site implica concordância com a versão vigente.",
                }
            }
        }
    }
}
