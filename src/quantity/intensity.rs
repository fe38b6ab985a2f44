quantity!(
    /// Kilograms of CO₂ emitted per kilowatt-hour of generated energy.
    KilogramsPerKilowattHour,
    "kg/kWh"
);
