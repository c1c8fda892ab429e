
pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod models {
    pub mod capability;
    pub mod conversion;
    pub mod format;
}

pub mod service {
    pub mod traits {
        pub mod i_service;
    }
    pub mod archive;
    pub mod collaborator;
    pub mod config_service;
    pub mod docx;
    pub mod error;
    pub mod html;
    pub mod image;
    pub mod media;
    pub mod pdf;
}

pub mod facade {
    pub mod traits {
        pub mod i_conversion;
    }
    pub mod conversion_facade;
    pub mod dispatcher;
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod utils {
    pub mod html;
    pub mod process;
    pub mod utils;
}
