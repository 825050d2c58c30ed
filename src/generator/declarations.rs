use super::CSharpCodeGenerator;
use crate::ast::{ClassDefinition, EnumDefinition, Field, Member, Method, Parameter};
use crate::generator::helpers;

impl CSharpCodeGenerator {
    pub fn generate_class(&mut self, class: &ClassDefinition) {
        let mut header = String::new();
        let modifiers = helpers::modifiers_to_string(&class.modifiers);
        if !modifiers.is_empty() {
            header.push_str(&modifiers);
            header.push(' ');
        }
        header.push_str("class ");
        header.push_str(&class.name);
        self.writer.write_indented(&header);

        for parameter in &class.generic_parameters {
            self.not_supported("generic parameter declaration", parameter.span);
        }

        if !class.base_types.is_empty() {
            self.writer.write(" : ");
            let last = class.base_types.len() - 1;
            for (index, base) in class.base_types.iter().enumerate() {
                self.generate_type_reference(base);
                if index < last {
                    self.writer.write(", ");
                }
            }
        }
        self.writer.write_line("");
        self.writer.write_line("{");

        let label = format!("class {}", class.name);
        self.within(label, |this| {
            this.indented(|this| {
                for member in &class.members {
                    this.generate_member(member);
                }
                this.writer.write_line("");
            });
        });
        self.writer.write("}");
    }

    pub fn generate_enum(&mut self, definition: &EnumDefinition) {
        let mut header = String::new();
        let modifiers = helpers::modifiers_to_string(&definition.modifiers);
        if !modifiers.is_empty() {
            header.push_str(&modifiers);
            header.push(' ');
        }
        header.push_str("enum ");
        header.push_str(&definition.name);
        self.writer.write_indented(&header);
        self.writer.write_line("");
        self.writer.write_line("{");

        let label = format!("enum {}", definition.name);
        self.within(label, |this| {
            this.indented(|this| {
                let last = definition.members.len().checked_sub(1);
                for (index, member) in definition.members.iter().enumerate() {
                    this.writer.write(&member.name);
                    if let Some(initializer) = &member.initializer {
                        this.writer.write(" = ");
                        this.generate_expression(initializer);
                    }
                    if Some(index) == last {
                        this.writer.write_line("");
                    } else {
                        this.writer.write_line(",");
                    }
                }
            });
        });
        self.writer.write("}");
    }

    pub fn generate_member(&mut self, member: &Member) {
        match member {
            Member::Field(field) => self.generate_field(field),
            Member::Method(method) => self.generate_method(method),
            Member::Property(property) => {
                self.not_supported("property", property.span);
                // Accessor bodies still hold translatable statements.
                if let Some(getter) = &property.getter {
                    self.generate_method(getter);
                }
                if let Some(setter) = &property.setter {
                    self.generate_method(setter);
                }
            }
            Member::Event(event) => self.not_supported("event", event.span),
            Member::Constructor(constructor) => {
                self.not_supported("constructor", constructor.span);
            }
            Member::Destructor(destructor) => {
                self.not_supported("destructor", destructor.span);
                let label = format!("destructor {}", destructor.name);
                self.within(label, |this| this.generate_block(&destructor.body));
            }
            Member::ExplicitInterfaceMember { span, .. } => {
                self.not_supported("explicit interface member", *span);
            }
        }
    }

    pub fn generate_field(&mut self, field: &Field) {
        self.writer
            .write(&helpers::modifiers_to_string(&field.modifiers));
        self.writer.write(" ");
        self.generate_type_reference(&field.ty);
        self.writer.write(" ");
        self.writer.write(&field.name);
        if let Some(initializer) = &field.initializer {
            self.writer.write(" = ");
            self.generate_expression(initializer);
        }
        self.writer.write_line(";");
    }

    pub fn generate_method(&mut self, method: &Method) {
        // Entry-point wiring belongs to the host environment, not the
        // translated script.
        if method.name == self.entry_point_name() {
            return;
        }

        for parameter in &method.generic_parameters {
            self.not_supported("generic parameter declaration", parameter.span);
        }

        self.writer
            .write_indented(&helpers::modifiers_to_string(&method.modifiers));
        self.writer.write(" ");
        match &method.return_type {
            Some(ty) => self.generate_type_reference(ty),
            None => self.writer.write("void"),
        }
        self.writer.write(" ");
        self.writer.write(&method.name);
        self.writer.write("(");
        let last = method.parameters.len().checked_sub(1);
        for (index, parameter) in method.parameters.iter().enumerate() {
            self.generate_parameter(parameter);
            if Some(index) != last {
                self.writer.write(", ");
            }
        }
        self.writer.write(")");

        let label = format!("method {}", method.name);
        self.within(label, |this| this.generate_method_body(method));
    }

    fn generate_parameter(&mut self, parameter: &Parameter) {
        self.generate_type_reference(&parameter.ty);
        self.writer.write(" ");
        self.writer.write(&parameter.name);
    }

    /// Emit a method body block, hoisting every non-synthetic local's
    /// source-written declaration ahead of the body's own statements. UnityScript
    /// permits declaration anywhere in a method; C# wants it at or before
    /// first use.
    fn generate_method_body(&mut self, method: &Method) {
        self.writer.write_line("");
        self.writer.write_line("{");
        self.indented(|this| {
            for local in &method.locals {
                if local.synthetic {
                    continue;
                }
                if let Some(declaration) = &local.declaration {
                    this.generate_declaration_statement(declaration);
                }
            }
            for statement in &method.body.statements {
                this.generate_statement(statement);
            }
        });
        self.writer.write_line("");
        self.writer.write_line("}");
    }
}
