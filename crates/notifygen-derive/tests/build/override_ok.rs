use notifygen_derive::Observable;

#[derive(Observable)]
struct Widget {
    #[observable(property_name = "CustomValue")]
    _x: u32,
    #[observable_property]
    _y: u32,
}

fn main() {
    let _ = Widget { _x: 0, _y: 0 };
}
