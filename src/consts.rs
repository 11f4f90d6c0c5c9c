pub mod form_consts {
    //! Login Form Constants
    //!
    //! This module contains all fixed values of the login form,
    //! organized by functional area for clarity.

    // =============================================================================
    // CREDENTIAL
    // =============================================================================
    // A literal compiled into the binary, not a secret store. Replace the
    // verifier rather than these values when a real backend exists.

    /// Identifier accepted by the built-in verifier
    pub const VALID_ID: &str = "teacher123";

    /// Secret accepted by the built-in verifier
    pub const VALID_PASSWORD: &str = "password123";

    // =============================================================================
    // DISPLAY TEXT
    // =============================================================================

    pub mod text {
        pub const TITLE: &str = "Teacher Login";
        pub const ID_LABEL: &str = "Teacher ID:";
        pub const PASSWORD_LABEL: &str = "Password:";
        pub const SUBMIT_LABEL: &str = "Log In";
        pub const FOOTER: &str =
            "For assistance, contact: support@school.edu | Phone: (555) 123-4567";
        pub const KEY_HINTS: &str = "[Tab] Next field | [Enter] Log in | [Esc] Quit";

        pub const NEEDS_INPUT: &str = "Please enter ID and Password";
        pub const ACCEPTED: &str = "Login successful";
        pub const REJECTED: &str = "Invalid ID or Password";

        pub const TOO_SMALL: &str = "Terminal too small for the login form";
    }

    // =============================================================================
    // COLORS
    // =============================================================================

    pub mod colors {
        use ratatui::style::Color;

        /// Light panel background, used when background painting is enabled
        pub const BACKGROUND: Color = Color::Rgb(240, 240, 240); // #f0f0f0
        /// Text color on the light background
        pub const TEXT: Color = Color::Rgb(51, 51, 51); // #333333
        pub const BUTTON_BG: Color = Color::Rgb(76, 175, 80); // #4CAF50
        pub const BUTTON_FG: Color = Color::White;
        pub const FOOTER: Color = Color::Rgb(102, 102, 102); // #666666
        pub const BORDER: Color = Color::Gray;
        pub const FOCUS: Color = Color::Cyan;

        pub const SUCCESS: Color = Color::Green;
        pub const WARNING: Color = Color::Red;
    }

    // =============================================================================
    // GEOMETRY
    // =============================================================================

    /// Fixed form panel size in terminal cells
    pub mod panel {
        pub const WIDTH: u16 = 76;
        pub const HEIGHT: u16 = 22;
    }

    /// Presence indicator drawing parameters, in canvas units
    pub mod indicator {
        /// Canvas spans [-BOUND, BOUND] on both axes
        pub const BOUND: f64 = 10.0;
        pub const OUTER_RADIUS: f64 = 9.0;
        pub const INNER_RADIUS: f64 = 6.0;
        /// Radius decrement between the concentric rings that fill the inner circle
        pub const FILL_STEP: f64 = 0.5;
    }

    // =============================================================================
    // INPUT
    // =============================================================================

    pub mod input {
        use std::time::Duration;

        /// Default character drawn for each character of the secret
        pub const DEFAULT_MASK_CHAR: char = '*';

        /// Event poll timeout of the UI loop (milliseconds)
        pub const POLL_INTERVAL_MS: u64 = 100;

        /// Helper function to get the poll interval
        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }
    }
}
