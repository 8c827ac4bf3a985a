#[macro_export]
macro_rules! const_assert {
    ($check:expr $(,$msg:tt)*) => {
        const _: () = assert!($check $(,$msg)*);
    };
}

#[macro_export]
macro_rules! size_of {
    ($t:ty) => {
        size_of::<$t>()
    };
}

/// Builds a [`DynamicArray`](crate::DynamicArray) with the default growth policy.
///
/// ```
/// let arr = dynarr::dynarr![1, 2, 3];
/// assert_eq!(arr.size(), 3);
/// let zeros = dynarr::dynarr![0u8; 4];
/// assert_eq!(zeros.capacity(), 4);
/// ```
#[macro_export]
macro_rules! dynarr {
    () => (
        <$crate::DynamicArray<_>>::new()
    );
    ($value:expr; $n:expr) => ({
        let mut arr = <$crate::DynamicArray<_>>::new();
        if let Err(err) = arr.assign($n, $value) {
            panic!("failed to build dynamic array: {}", err)
        }
        arr
    });
    [$($elem:expr),+ $(,)?] => (
        <$crate::DynamicArray<_> as ::core::iter::FromIterator<_>>::from_iter([$($elem),+])
    );
}

/// Emits one `impl` block per listed trait for the same generic type.
#[macro_export]
macro_rules! impl_traits {
    (
        for $type:ident $(<$($gen:tt $(: $bounds:tt)?),*>)?
        $trait:ident $(<$($trg:ty),+>)? $(where $($trbl:ty: $trbr:path),+)? =>
            $(type $stype:ident = $sty:ty;)*
            $(
                $(#[$attr:meta])*
                fn $met:ident $(<$($met_g:tt $(: $met_gb:tt)?),*>)? ($($arg:tt)*) $(-> $ret:ty)? $body:block
            )*
        $(, $($rest:tt)*)?
    ) =>
    {
        impl<$($($gen $(: $bounds)?),*)?> $trait $(<$($trg),+>)? for $type<$($($gen),*)?>
            $(
                where
                    $($trbl: $trbr),+
            )?
        {

            $(
                type $stype = $sty;
            )*

            $(
                $(#[$attr])*
                fn $met $(<$($met_g $(: $met_gb)?),*>)? ($($arg)*) $(-> $ret)? $body
            )*
        }
        $crate::impl_traits! {
            for $type $(<$($gen $(: $bounds)?),*>)?
            $($($rest)*)?
        }
    };
    (
        for $type:ident $(<$($gen:tt $(: $bounds:tt)?),*>)?
    ) =>
    {
    };
}
