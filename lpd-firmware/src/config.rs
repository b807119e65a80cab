// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use lpd_core::MAX_INTENSITY;

// ============================================================================
// Strip Konfiguration
// ============================================================================

/// GPIO-Pin für die serielle Datenleitung (SDO → DIN am Strip)
/// Muss zum Peripheral in `strip_refresh_task` passen
pub const LED_DATA_GPIO_PIN: u8 = 4;

/// GPIO-Pin für die Taktleitung (SCLK → CIN am Strip)
pub const LED_CLOCK_GPIO_PIN: u8 = 5;

/// Anzahl der LED-Zellen im Strip (1 Zelle = 1 LPD6803 Kanal-Triple)
pub const CELL_COUNT: usize = 50;

/// Periode der Control-Loop in Millisekunden
/// Jeder Tick: Muster weiterschieben, dann kompletter Refresh
pub const REFRESH_INTERVAL_MS: u64 = 100;

/// Helligkeits-Level für das Demo-Muster (0-31, 5 Bit)
pub const DEMO_INTENSITY: u8 = MAX_INTENSITY;
