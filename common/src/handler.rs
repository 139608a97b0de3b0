//! [`Handler`] abstractions.

use std::future::Future;

/// Executable handler.
///
/// Commands, queries and API calls are all expressed as a [`Handler`] of
/// some operation type, so each layer can be swapped independently.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}

impl<Args, H> Handler<Args> for &H
where
    H: Handler<Args> + ?Sized,
{
    type Ok = H::Ok;
    type Err = H::Err;

    async fn execute(&self, args: Args) -> Result<Self::Ok, Self::Err> {
        (**self).execute(args).await
    }
}

#[cfg(test)]
mod spec {
    use std::cell::Cell;

    use super::Handler;

    #[derive(Debug, Default)]
    struct Counter(Cell<u32>);

    impl Handler<u32> for Counter {
        type Ok = u32;
        type Err = ();

        async fn execute(&self, by: u32) -> Result<u32, ()> {
            self.0.set(self.0.get() + by);
            Ok(self.0.get())
        }
    }

    async fn twice<H: Handler<u32, Ok = u32, Err = ()>>(h: H) -> u32 {
        _ = h.execute(1).await;
        h.execute(1).await.unwrap_or_default()
    }

    #[tokio::test]
    async fn borrowed_handler_shares_state() {
        let counter = Counter::default();

        let total = twice(&counter).await;

        assert_eq!(total, 2);
        assert_eq!(counter.0.get(), 2);
    }
}
