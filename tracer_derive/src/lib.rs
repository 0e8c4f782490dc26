use syn::{parse_macro_input, DeriveInput};

mod approx_eq;
mod common;
mod vec_op;

// Component-wise math ops for the tracer's vector-like types.
//
// The structs are expected to have the form
//
// struct Type<T>
// where
//     T: Bounds
// {
//     pub a: T,
//     pub b: T,
//     ..
// }
//
// and to provide `fn has_nans(&self) -> bool` for the debug checks.

macro_rules! derive {
    ($tr:ident $fn_name:ident $module:ident::$gen:ident) => {
        #[proc_macro_derive($tr)]
        pub fn $fn_name(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
            // Parse the input tokens into a syntax tree.
            let input = parse_macro_input!(input as DeriveInput);
            proc_macro::TokenStream::from($module::$gen(input, stringify!($tr)))
        }
    };
}

derive!(Add add vec_op::vec_op);
derive!(Sub sub vec_op::vec_op);
derive!(Mul mul vec_op::vec_op);
derive!(Div div vec_op::vec_op);
derive!(MulScalar mul_scalar vec_op::vec_op);
derive!(DivScalar div_scalar vec_op::vec_op);
derive!(AddAssign add_assign vec_op::vec_op);
derive!(SubAssign sub_assign vec_op::vec_op);
derive!(MulAssign mul_assign vec_op::vec_op);
derive!(MulAssignScalar mul_assign_scalar vec_op::vec_op);
derive!(DivAssignScalar div_assign_scalar vec_op::vec_op);
derive!(Neg neg vec_op::neg);
derive!(AbsDiffEq abs_diff_eq approx_eq::abs_diff_eq);
derive!(RelativeEq relative_eq approx_eq::relative_eq);
