use dioxus::prelude::*;

use crate::components::helpers::PageContainer;

#[component]
pub fn AboutView(author_photo: String) -> Element {
    rsx! {
        PageContainer { title: "Quem é Ashyus?", subtitle: "O cronista por trás das runas",
            div { class: "grid gap-10 md:grid-cols-[18rem_1fr] items-start",
                img {
                    class: "w-72 h-72 object-cover rounded-full border-4 border-amber-700/60 shadow-2xl mx-auto",
                    src: "{author_photo}",
                    alt: "Foto do autor Ashyus",
                }
                div { class: "space-y-4 text-slate-300 leading-relaxed",
                    p {
                        "Ashyus é um autor brasileiro de dark fantasy e romance, fascinado pelo ponto exato em que a razão deixa de bastar e o mistério começa."
                    }
                    p {
                        "Entre runas esquecidas, vilas envoltas em neblina e personagens que carregam mais sombra do que admitem, suas histórias exploram escolhas difíceis e os preços que elas cobram."
                    }
                    p {
                        "Quando não está escrevendo, está lendo mitologia, colecionando mapas antigos ou discutindo com o gato sobre quem manda na biblioteca."
                    }
                }
            }
        }
    }
}
