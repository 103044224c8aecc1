pub type Volts = f32;
pub type Ohms = f32;
pub type Percent = u8;
