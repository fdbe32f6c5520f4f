use edu_web::app_root::app_root;

fn main() {
    // Initialize platform-specific logging
    edu_web::app::logging::init();
    dioxus::launch(app_root);
}
