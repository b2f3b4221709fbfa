//! Declarative helpers shared by [`crate::types`] and [`crate::methods`].

/// Implement [`crate::RemoteType`] and [`crate::ToParam`] for wire types.
macro_rules! remote_types {
    ($($name:ident),* $(,)?) => {
        $(
            impl $crate::RemoteType for $name {
                const NAME: &'static str = stringify!($name);
            }

            impl $crate::params::ToParam for $name {
                fn to_param(&self) -> $crate::params::Param {
                    $crate::params::Param::Object(Box::new(self.clone()))
                }
            }
        )*
    };
}

/// Define an endpoint request struct.
///
/// Required parameters become plain fields and `new()` arguments; optional
/// parameters become `Option` fields with a chainable setter each. A trailing
/// `attachments <field>` adds named uploads sent as extra top-level
/// parameters, for `attach://<name>` references.
macro_rules! remote_call {
    (
        $(#[$meta:meta])*
        $name:ident ($method:literal) -> $ret:ty {
            required {
                $( $(#[$rmeta:meta])* $req:ident : $req_ty:ty ),* $(,)?
            }
            optional {
                $( $(#[$ometa:meta])* $opt:ident : $opt_ty:ty ),* $(,)?
            }
            $( attachments $attach:ident )?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            $( $(#[$rmeta])* pub $req: $req_ty, )*
            $( $(#[$ometa])* pub $opt: Option<$opt_ty>, )*
            $(
                /// Files uploaded under their own names, referenced as `attach://<name>`.
                pub $attach: Vec<(String, $crate::params::InputFile)>,
            )?
        }

        impl $name {
            /// Create the request from its required parameters.
            #[allow(clippy::new_without_default, clippy::too_many_arguments)]
            pub fn new($( $req: impl Into<$req_ty> ),*) -> Self {
                Self {
                    $( $req: $req.into(), )*
                    $( $opt: None, )*
                    $( $attach: Vec::new(), )?
                }
            }

            $(
                /// Upload `file` under `name`, so media in this request can
                /// refer to it as `attach://<name>`.
                ///
                /// Attachments never replace the request's own parameters: a
                /// `name` equal to a parameter name (`chat_id`, `media`, …) or
                /// to an earlier attachment is left out of [`Self::params`].
                pub fn attach(mut self, name: impl Into<String>, file: $crate::params::InputFile) -> Self {
                    self.$attach.push((name.into(), file));
                    self
                }
            )?

            $(
                #[doc = concat!("Set the optional `", stringify!($opt), "` parameter.")]
                pub fn $opt(mut self, value: impl Into<$opt_ty>) -> Self {
                    self.$opt = Some(value.into());
                    self
                }
            )*
        }

        impl $crate::RemoteCall for $name {
            const METHOD: &'static str = $method;
            type Return = $ret;

            fn params(&self) -> $crate::params::Params {
                #[allow(unused_mut)]
                let mut params = $crate::params::Params::new();
                $( params.push($crate::params::wire_key(stringify!($req)), $crate::params::ToParam::to_param(&self.$req)); )*
                $( params.push($crate::params::wire_key(stringify!($opt)), $crate::params::ToParam::to_param(&self.$opt)); )*
                $(
                    for (name, file) in &self.$attach {
                        if !params.contains_key(name) {
                            params.push(name.clone(), $crate::params::Param::File(file.clone()));
                        }
                    }
                )?
                params
            }
        }
    };
}
