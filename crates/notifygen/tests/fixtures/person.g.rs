// Code generated by notifygen for `demo::Person`. Do not edit by hand.
// Include this file from the module that declares `Person`.

impl crate::observable::ObservableObject for Person {
    fn property_changed(&mut self) -> &mut crate::observable::PropertyChangedEvent {
        &mut self.property_changed
    }
}

impl Person {
    /// Raise a change notification carrying `property_name`.
    pub(crate) fn raise_property_changed(&mut self, property_name: &'static str) {
        crate::observable::ObservableObject::property_changed(self).raise(property_name);
    }

    pub fn name(&self) -> &String {
        &self._name
    }

    pub fn set_name(&mut self, value: String) {
        if self._name == value {
            return;
        }
        self._name = value;
        self.raise_property_changed("Name");
    }

    pub fn age(&self) -> &u32 {
        &self._age
    }

    pub fn set_age(&mut self, value: u32) {
        if self._age == value {
            return;
        }
        self._age = value;
        self.raise_property_changed("Age");
    }
}
