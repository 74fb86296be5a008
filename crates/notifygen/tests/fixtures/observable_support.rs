// Code generated by notifygen. Do not edit by hand.
// Include this file once at the crate root as `mod observable;`.

/// Payload carried by a property change notification.
pub struct PropertyChangedArgs {
    pub property_name: &'static str,
}

/// Subscriber list for property change notifications.
#[derive(Default)]
pub struct PropertyChangedEvent {
    handlers: Vec<Box<dyn FnMut(&PropertyChangedArgs)>>,
}

impl PropertyChangedEvent {
    /// Register a handler invoked on every raised notification.
    pub fn subscribe(&mut self, handler: impl FnMut(&PropertyChangedArgs) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Invoke every subscribed handler with `property_name`.
    pub fn raise(&mut self, property_name: &'static str) {
        let args = PropertyChangedArgs { property_name };
        for handler in &mut self.handlers {
            handler(&args);
        }
    }
}

/// Implemented by every type with observable properties.
///
/// Mark backing fields with `#[observable]`, or
/// `#[observable(property_name = "...")]` to pick the property name
/// explicitly, and declare a `property_changed: PropertyChangedEvent`
/// field alongside them for the generated code to store subscribers in.
pub trait ObservableObject {
    fn property_changed(&mut self) -> &mut PropertyChangedEvent;
}
