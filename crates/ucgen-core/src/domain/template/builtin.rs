//! Built-in template sources.
//!
//! Plain strings with `{{NAME}}` placeholders, see [`super::RenderContext`].
//! Variables available to every template:
//!
//! | Variable          | Example              |
//! |-------------------|----------------------|
//! | `DOMAIN`          | `products`           |
//! | `DOMAIN_PASCAL`   | `Products`           |
//! | `USE_CASE`        | `get-product`        |
//! | `USE_CASE_CAMEL`  | `getProduct`         |
//! | `USE_CASE_PASCAL` | `GetProduct`         |
//! | `USE_CASE_SYMBOL` | `GET_PRODUCT_USE_CASE` |
//! | `API`             | `products`           |
//! | `API_CAMEL`       | `products`           |
//! | `API_PASCAL`      | `Products`           |
//! | `API_SYMBOL`      | `PRODUCTS`           |
//! | `HTTP_METHOD`     | `GET`                |
//! | `ENDPOINT`        | `/api/v1/get/product` |

pub(super) const INTERFACE: &str = r#"export type {{USE_CASE_PASCAL}}Input = Record<string, unknown>;

export type {{USE_CASE_PASCAL}}Output = unknown;

export interface I{{USE_CASE_PASCAL}}UseCase {
  execute(input?: {{USE_CASE_PASCAL}}Input): Promise<{{USE_CASE_PASCAL}}Output>;
}
"#;

pub(super) const IMPLEMENTATION: &str = r#"import { inject, injectable } from "inversify";

import { SYMBOLS } from "@/di/symbols";
import type {
  I{{USE_CASE_PASCAL}}UseCase,
  {{USE_CASE_PASCAL}}Input,
  {{USE_CASE_PASCAL}}Output,
} from "@/domains/{{DOMAIN}}/usecases/{{USE_CASE}}.usecase.interface";
import type { {{API_PASCAL}}Api } from "@/infrastructure/api/{{API}}/{{API}}.api";

@injectable()
export class {{USE_CASE_PASCAL}}UseCase implements I{{USE_CASE_PASCAL}}UseCase {
  constructor(
    @inject(SYMBOLS.{{API_SYMBOL}})
    private readonly {{API_CAMEL}}Api: {{API_PASCAL}}Api,
  ) {}

  async execute(input?: {{USE_CASE_PASCAL}}Input): Promise<{{USE_CASE_PASCAL}}Output> {
    return this.{{API_CAMEL}}Api.{{USE_CASE_CAMEL}}({{CALL_ARGS}});
  }
}
"#;

pub(super) const API_CLIENT_NEW: &str = r#"import { injectable } from "inversify";

@injectable()
export class {{API_PASCAL}}Api {
  private readonly baseUrl = process.env.API_BASE_URL ?? "";

{{METHOD}}

  private async handle(response: Response): Promise<unknown> {
    if (!response.ok) {
      throw new Error(`Request failed with status ${response.status}`);
    }
    return response.status === 204 ? undefined : response.json();
  }
}
"#;

pub(super) const METHOD_GET: &str = r#"  async {{USE_CASE_CAMEL}}(id?: string): Promise<unknown> {
    const path = id ? `{{ENDPOINT}}/${id}` : `{{ENDPOINT}}`;
    const response = await fetch(`${this.baseUrl}${path}`, {
      method: "GET",
    });
    return this.handle(response);
  }"#;

pub(super) const METHOD_POST: &str = r#"  async {{USE_CASE_CAMEL}}(body: unknown): Promise<unknown> {
    const response = await fetch(`${this.baseUrl}{{ENDPOINT}}`, {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify(body),
    });
    return this.handle(response);
  }"#;

/// PUT and PATCH share a shape; only the verb differs.
pub(super) const METHOD_WITH_ID_AND_BODY: &str = r#"  async {{USE_CASE_CAMEL}}(id: string, body: unknown): Promise<unknown> {
    const response = await fetch(`${this.baseUrl}{{ENDPOINT}}/${id}`, {
      method: "{{HTTP_METHOD}}",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify(body),
    });
    return this.handle(response);
  }"#;

pub(super) const METHOD_DELETE: &str = r#"  async {{USE_CASE_CAMEL}}(id: string): Promise<unknown> {
    const response = await fetch(`${this.baseUrl}{{ENDPOINT}}/${id}`, {
      method: "DELETE",
    });
    return this.handle(response);
  }"#;

pub(super) const METHOD_UNSUPPORTED: &str = r#"  async {{USE_CASE_CAMEL}}(..._args: unknown[]): Promise<unknown> {
    throw new Error("Unsupported HTTP method: {{HTTP_METHOD}}");
  }"#;

pub(super) const ACTION: &str = r#""use server";

import { container } from "@/di/container";
import { SYMBOLS } from "@/di/symbols";
import type {
  I{{USE_CASE_PASCAL}}UseCase,
  {{USE_CASE_PASCAL}}Input,
  {{USE_CASE_PASCAL}}Output,
} from "@/domains/{{DOMAIN}}/usecases/{{USE_CASE}}.usecase.interface";

export async function {{USE_CASE_CAMEL}}Action(
  input?: {{USE_CASE_PASCAL}}Input,
): Promise<{{USE_CASE_PASCAL}}Output> {
  const useCase = container.get<I{{USE_CASE_PASCAL}}UseCase>(SYMBOLS.{{USE_CASE_SYMBOL}});
  return useCase.execute(input);
}
"#;

pub(super) const ENTITY: &str = r#"export interface {{DOMAIN_PASCAL}}Entity {
  id: string;
  createdAt?: string;
  updatedAt?: string;
}
"#;

pub(super) const BASE_INTERFACE: &str = r#"export interface IUseCase<TInput = unknown, TOutput = unknown> {
  execute(input?: TInput): Promise<TOutput>;
}
"#;

pub(super) const API_CLIENT_UTIL: &str = r#"export interface ApiRequest {
  method: "GET" | "POST" | "PUT" | "PATCH" | "DELETE";
  path: string;
  body?: unknown;
  headers?: Record<string, string>;
}

const baseUrl = process.env.API_BASE_URL ?? "";

export async function apiRequest<T = unknown>(request: ApiRequest): Promise<T> {
  const hasBody = request.body !== undefined;
  const response = await fetch(`${baseUrl}${request.path}`, {
    method: request.method,
    headers: {
      ...(hasBody ? { "Content-Type": "application/json" } : {}),
      ...request.headers,
    },
    body: hasBody ? JSON.stringify(request.body) : undefined,
  });
  if (!response.ok) {
    throw new Error(`Request failed with status ${response.status}`);
  }
  return (response.status === 204 ? undefined : await response.json()) as T;
}
"#;
