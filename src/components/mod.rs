pub mod animated_counter;
pub mod dashboard_modal;
pub mod header;
pub mod hero;
pub mod loading_screen;
pub mod magnetic_button;
pub mod particle_field;
pub mod scroll_reveal;
pub mod service_card;
pub mod services;
pub mod typewriter;
