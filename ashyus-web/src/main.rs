fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(ashyus_web::App);
}
