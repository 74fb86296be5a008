use crate::observable::PropertyChangedEvent;
use notifygen_derive::Observable;

#[derive(Default, Observable)]
pub struct Person {
    #[observable]
    _name: String,
    #[observable]
    _age: u32,
    property_changed: PropertyChangedEvent,
}
