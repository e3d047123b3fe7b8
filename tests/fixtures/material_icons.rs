//
// This file was generated from the original 'codepoints' file
// from the material design icon fonts:
// https://github.com/google/material-design-icons
//
#[allow(non_upper_case_globals)]
pub mod assets {
    pub const N3dRotation: u32 = 0xe84d;
    pub const AcUnit: u32 = 0xeb3b;
    pub const AccessAlarm: u32 = 0xe190;
    pub const N24Hours: u32 = 0xab12;
    pub const GpsFixed: u32 = 0xe1b1;
    pub const ZoomOutMap: u32 = 0xe56b;
}
