//! Signal code generation.

use gtkforge_schema::SignalDecl;

/// Generator for the signal registry and the emit/connect helpers.
pub struct SignalGenerator<'a> {
    signals: &'a [SignalDecl],
}

impl<'a> SignalGenerator<'a> {
    /// Creates a new signal generator.
    #[must_use]
    pub fn new(signals: &'a [SignalDecl]) -> Self {
        Self { signals }
    }

    /// Generates the `Signal::builder` entries for `ObjectImpl::signals`.
    #[must_use]
    pub fn generate_registry(&self) -> String {
        if self.signals.is_empty() {
            return "                // No signals defined".to_string();
        }

        self.signals
            .iter()
            .map(Self::generate_builder)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Generates one registry entry.
    fn generate_builder(signal: &SignalDecl) -> String {
        let mut output = format!("                Signal::builder(\"{}\")", signal.name);

        if !signal.params.is_empty() {
            let types = signal
                .params
                .iter()
                .map(|p| format!("{}::static_type()", p.ty.rust_type()))
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!("\n                    .param_types([{types}])"));
        }

        if let Some(ret) = &signal.return_type {
            output.push_str(&format!("\n                    .return_type::<{}>()", ret.rust_type()));
        }

        output.push_str("\n                    .build(),");
        output
    }

    /// Generates the `emit_*` and `connect_*` wrapper methods.
    ///
    /// All emit helpers come first, then all connect helpers.
    #[must_use]
    pub fn generate_helpers(&self) -> String {
        self.signals
            .iter()
            .map(Self::generate_emit)
            .chain(self.signals.iter().map(Self::generate_connect))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Generates an `emit_*` method.
    fn generate_emit(signal: &SignalDecl) -> String {
        let method = format!("emit_{}", signal.method_name());
        let ret = signal.rust_return_type();
        let ret_suffix = if signal.returns_value() {
            format!(" -> {ret}")
        } else {
            String::new()
        };
        let terminator = if signal.returns_value() { "" } else { ";" };

        let mut output = String::new();
        if signal.params.is_empty() {
            output.push_str(&format!("    pub fn {method}(&self){ret_suffix} {{\n"));
            output.push_str(&format!(
                "        self.emit_by_name::<{ret}>(\"{}\", &[]){terminator}\n",
                signal.name
            ));
        } else {
            let params = signal
                .params
                .iter()
                .map(|p| format!("{}: {}", p.binding_name(), p.ty.rust_type()))
                .collect::<Vec<_>>()
                .join(", ");
            let args = signal
                .params
                .iter()
                .map(|p| format!("&{}", p.binding_name()))
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!("    pub fn {method}(&self, {params}){ret_suffix} {{\n"));
            output.push_str(&format!(
                "        self.emit_by_name::<{ret}>(\"{}\", &[{args}]){terminator}\n",
                signal.name
            ));
        }
        output.push_str("    }");
        output
    }

    /// Generates a `connect_*` method.
    ///
    /// `__values[0]` is the emitting object; parameters follow in declaration
    /// order. Only signals with a return type hand a value back. Locals of
    /// the helper start with `__`, which no declared parameter can.
    fn generate_connect(signal: &SignalDecl) -> String {
        let ret_suffix = if signal.returns_value() {
            format!(" -> {}", signal.rust_return_type())
        } else {
            String::new()
        };
        let mut handler_args = vec!["&Self".to_string()];
        handler_args.extend(signal.params.iter().map(|p| p.ty.rust_type().to_string()));

        let mut call_args = vec!["&__obj".to_string()];
        call_args.extend(signal.params.iter().map(|p| p.binding_name()));
        let call = format!("__handler({})", call_args.join(", "));

        let mut output = String::new();
        output.push_str(&format!(
            "    pub fn connect_{}<F: Fn({}){ret_suffix} + 'static>(&self, __handler: F) -> glib::SignalHandlerId {{\n",
            signal.method_name(),
            handler_args.join(", ")
        ));
        output.push_str(&format!(
            "        self.connect_local(\"{}\", false, move |__values| {{\n",
            signal.name
        ));
        output.push_str(
            "            let __obj = __values[0].get::<Self>().expect(\"Failed to get self from values\");\n",
        );
        for (i, param) in signal.params.iter().enumerate() {
            output.push_str(&format!(
                "            let {} = __values[{}].get::<{}>().expect(\"Failed to get parameter {}\");\n",
                param.binding_name(),
                i + 1,
                param.ty.rust_type(),
                param.name
            ));
        }
        if signal.returns_value() {
            output.push_str(&format!("            let __result = {call};\n"));
            output.push_str("            Some(__result.to_value())\n");
        } else {
            output.push_str(&format!("            {call};\n"));
            output.push_str("            None\n");
        }
        output.push_str("        })\n");
        output.push_str("    }");
        output
    }
}
