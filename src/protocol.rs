pub mod common {
    include!(concat!(env!("OUT_DIR"), "/game.common.rs"));
}

pub mod territory {
    include!(concat!(env!("OUT_DIR"), "/game.territory.rs"));
}
