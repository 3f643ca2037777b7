use core::convert::Infallible;

use embedded_hal::digital;
use mockall::mock;

mock! {
    pub OutputPin {}

    impl digital::ErrorType for OutputPin {
        type Error = Infallible;
    }

    impl digital::OutputPin for OutputPin {
        fn set_low(&mut self) -> Result<(), Infallible>;
        fn set_high(&mut self) -> Result<(), Infallible>;
    }
}
