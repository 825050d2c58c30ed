use super::CSharpCodeGenerator;
use crate::ast::{Expression, Literal, ResolvedEntity};
use crate::generator::helpers;

/// Reserved pseudo-type name marking an array instantiation disguised as a
/// generic reference.
const ARRAY_TYPE_NAME: &str = "array";

impl CSharpCodeGenerator {
    pub fn generate_expression(&mut self, expression: &Expression) {
        match expression {
            Expression::Literal { value, .. } => self.generate_literal(value),
            Expression::SelfReference { .. } => self.writer.write("this"),
            Expression::Reference { name, .. } => self.writer.write(name),
            Expression::MemberReference { target, name, .. } => {
                self.generate_expression(target);
                self.writer.write(&format!(".{}", name));
            }
            Expression::Binary {
                operator,
                left,
                right,
                synthetic,
                ..
            } => {
                if *synthetic {
                    return;
                }
                self.generate_expression(left);
                self.writer
                    .write(&format!(" {} ", helpers::csharp_binary_operator(*operator)));
                self.generate_expression(right);
            }
            Expression::Unary {
                operator, operand, ..
            } => {
                if operator.is_postfix() {
                    self.generate_expression(operand);
                    self.writer.write(helpers::csharp_unary_operator(*operator));
                } else {
                    self.writer.write(helpers::csharp_unary_operator(*operator));
                    self.generate_expression(operand);
                }
            }
            Expression::MethodInvocation {
                target, arguments, ..
            } => {
                // Intrinsic calls exist only to satisfy the source language's
                // semantics; they have no C# surface form.
                if matches!(target.entity(), Some(ResolvedEntity::BuiltinFunction)) {
                    return;
                }
                self.generate_expression(target);
                let brackets = self.take_brackets();
                self.writer.write(brackets.open());
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        self.writer.write(", ");
                    }
                    self.generate_expression(argument);
                }
                self.writer.write(brackets.close());
            }
            Expression::GenericReference {
                target, arguments, ..
            } => {
                if Self::is_array_instantiation(target, arguments) {
                    self.writer.write("new ");
                    self.generate_type_reference(&arguments[0]);
                    // The size list of the enclosing invocation renders as
                    // index brackets, consumed exactly once.
                    self.arm_square_brackets();
                    return;
                }
                self.generate_expression(target);
                self.writer.write("<");
                let last = arguments.len().saturating_sub(1);
                for (index, argument) in arguments.iter().enumerate() {
                    self.generate_type_reference(argument);
                    if index < last {
                        self.writer.write(", ");
                    }
                }
                self.writer.write(">");
            }
            Expression::Slicing {
                target, indices, ..
            } => {
                self.generate_expression(target);
                self.writer.write("[");
                if !indices.is_empty() {
                    for index in indices {
                        self.generate_expression(index);
                        self.writer.write(",");
                    }
                    self.writer.discard_last_fragment();
                }
                self.writer.write("]");
            }
            Expression::Conditional {
                condition,
                when_true,
                when_false,
                span,
            } => {
                self.not_supported("conditional expression", *span);
                self.generate_expression(condition);
                self.generate_expression(when_true);
                self.generate_expression(when_false);
            }
            Expression::Cast { ty, operand, span } => {
                self.not_supported("cast expression", *span);
                self.generate_type_reference(ty);
                self.generate_expression(operand);
            }
            Expression::TryCast { ty, operand, span } => {
                self.not_supported("try cast expression", *span);
                self.generate_type_reference(ty);
                self.generate_expression(operand);
            }
            Expression::TypeOf { ty, span } => {
                self.not_supported("typeof expression", *span);
                self.generate_type_reference(ty);
            }
            Expression::Interpolation { parts, span } => {
                self.not_supported("string interpolation", *span);
                for part in parts {
                    self.generate_expression(part);
                }
            }
            Expression::Quasiquote { span } => self.not_supported("quasiquote expression", *span),
            Expression::Splice { expression, span } => {
                self.not_supported("splice expression", *span);
                self.generate_expression(expression);
            }
            Expression::ListLiteral { items, span } => {
                self.not_supported("list literal", *span);
                for item in items {
                    self.generate_expression(item);
                }
            }
            Expression::HashLiteral { pairs, span } => {
                self.not_supported("hash literal", *span);
                for (key, value) in pairs {
                    self.generate_expression(key);
                    self.generate_expression(value);
                }
            }
            Expression::ArrayLiteral { items, span } => {
                self.not_supported("array literal", *span);
                for item in items {
                    self.generate_expression(item);
                }
            }
            Expression::Generator {
                expression,
                iterator,
                span,
            } => {
                self.not_supported("generator expression", *span);
                self.generate_expression(expression);
                self.generate_expression(iterator);
            }
            Expression::BlockExpression { span, .. } => {
                self.not_supported("block expression", *span);
            }
            Expression::RegexLiteral { span, .. } => self.not_supported("regex literal", *span),
            Expression::CharLiteral { span, .. } => self.not_supported("char literal", *span),
            Expression::TimeSpanLiteral { span, .. } => {
                self.not_supported("timespan literal", *span);
            }
            Expression::Custom { span } => self.not_supported("custom expression", *span),
        }
    }

    fn generate_literal(&mut self, literal: &Literal) {
        match literal {
            Literal::String(value) => self
                .writer
                .write(&format!("\"{}\"", helpers::escape_string(value))),
            Literal::Integer(value) => self.writer.write(&value.to_string()),
            Literal::Float(value) => self.writer.write(&format!("{}f", value)),
            Literal::Bool(value) => self.writer.write(if *value { "true" } else { "false" }),
            Literal::Null => self.writer.write("null"),
        }
    }

    fn is_array_instantiation(
        target: &Expression,
        arguments: &[crate::ast::TypeReference],
    ) -> bool {
        !arguments.is_empty()
            && matches!(target, Expression::Reference { name, .. } if name == ARRAY_TYPE_NAME)
    }

    pub(crate) fn is_suppressed_invocation(expression: &Expression) -> bool {
        matches!(
            expression,
            Expression::MethodInvocation { target, .. }
                if matches!(target.entity(), Some(ResolvedEntity::BuiltinFunction))
        )
    }
}
